use alloy::sol;

sol!(
    #[sol(rpc)]
    contract LuxuryToken {
        constructor(
            string name,
            string symbol,
            bytes32 assetId,
            bytes32 metadataHash,
            uint256 initialSupply,
            address owner
        );

        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function owner() external view returns (address);
        function assetId() external view returns (bytes32);
        function metadataHash() external view returns (bytes32);
    }
);
