//! Contract bindings used to inspect a Safe and to batch calls

use alloy::sol;

sol! {
    /// Read-only view of a Safe (shared by v1.1.1 through v1.4.1)
    #[sol(rpc)]
    interface ISafe {
        function getThreshold() external view returns (uint256 threshold);
        function isOwner(address owner) external view returns (bool isOwner);
        function VERSION() external view returns (string memory version);
    }

    /// MultiSend / MultiSendCallOnly entry point
    interface IMultiSend {
        /// @param transactions operation (1) | to (20) | value (32) | data length (32) | data, concatenated
        function multiSend(bytes memory transactions) external payable;
    }
}

/// keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)")
pub const SAFE_TX_TYPEHASH: [u8; 32] = [
    0xbb, 0x83, 0x10, 0xd4, 0x86, 0x36, 0x8d, 0xb6, 0xbd, 0x6f, 0x84, 0x94, 0x02, 0xfd, 0xd7, 0x3a,
    0xd5, 0x3d, 0x31, 0x6b, 0x5a, 0x4b, 0x26, 0x44, 0xad, 0x6e, 0xfe, 0x0f, 0x94, 0x12, 0x86, 0xd8,
];

/// keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")
pub const DOMAIN_SEPARATOR_TYPEHASH: [u8; 32] = [
    0x47, 0xe7, 0x95, 0x34, 0xa2, 0x45, 0x95, 0x2e, 0x8b, 0x16, 0x89, 0x3a, 0x33, 0x6b, 0x85, 0xa3,
    0xd9, 0xea, 0x9f, 0xa8, 0xc5, 0x73, 0xf3, 0xd8, 0x03, 0xaf, 0xb9, 0x2a, 0x79, 0x46, 0x92, 0x18,
];

/// keccak256("EIP712Domain(address verifyingContract)"), used before v1.3.0
pub const LEGACY_DOMAIN_SEPARATOR_TYPEHASH: [u8; 32] = [
    0x03, 0x5a, 0xff, 0x83, 0xd8, 0x69, 0x37, 0xd3, 0x5b, 0x32, 0xe0, 0x4f, 0x0d, 0xdc, 0x6f, 0xf4,
    0x69, 0x29, 0x0e, 0xef, 0x2f, 0x1b, 0x69, 0x2d, 0x8a, 0x81, 0x5c, 0x89, 0x40, 0x4d, 0x47, 0x49,
];
