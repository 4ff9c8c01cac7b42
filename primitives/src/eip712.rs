// Copyright 2022-2023 Futureverse Corporation Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// You may obtain a copy of the License at the root of this project source code

//! EIP-712 typed-data hashing for `UsageReceipt` messages.
//!
//! Off-chain gateways sign a receipt the same way a dApp would sign typed data for
//! MetaMask; `digest` reproduces exactly that hash on-chain so `sp_io::crypto::secp256k1_ecdsa_recover`
//! can recover the same signer address.

use crate::{AssetId, Balance, EthAddress, Nonce, Timestamp};
use sp_io::hashing::keccak_256;
use sp_std::vec::Vec;

const DOMAIN_TYPE: &[u8] =
	b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";
const RECEIPT_TYPE: &[u8] =
	b"UsageReceipt(uint256 asset_id,uint256 amount,address user,uint256 nonce,uint256 deadline)";

/// Left-pads an unsigned integer into a 32-byte big-endian word, as `abi.encode` would.
fn pad_uint(value: u128) -> [u8; 32] {
	let mut out = [0u8; 32];
	out[16..].copy_from_slice(&value.to_be_bytes());
	out
}

/// Left-pads a 20-byte address into a 32-byte word.
fn pad_address(addr: &EthAddress) -> [u8; 32] {
	let mut out = [0u8; 32];
	out[12..].copy_from_slice(addr.as_bytes());
	out
}

/// The signing domain fixed at a ReceiptVerifier instance's construction.
#[derive(Clone)]
pub struct Domain {
	pub name: Vec<u8>,
	pub version: Vec<u8>,
	pub chain_id: u64,
	pub verifying_contract: EthAddress,
}

impl Domain {
	pub fn separator(&self) -> [u8; 32] {
		let mut buf = Vec::with_capacity(32 * 4);
		buf.extend_from_slice(&keccak_256(DOMAIN_TYPE));
		buf.extend_from_slice(&keccak_256(&self.name));
		buf.extend_from_slice(&keccak_256(&self.version));
		buf.extend_from_slice(&pad_uint(self.chain_id as u128));
		buf.extend_from_slice(&pad_address(&self.verifying_contract));
		keccak_256(&buf)
	}
}

/// Hashes the `UsageReceipt` struct fields, in the fixed field order the spec mandates:
/// `asset_id ‖ amount ‖ user ‖ nonce ‖ deadline`.
pub fn struct_hash(
	asset_id: AssetId,
	amount: Balance,
	user: &EthAddress,
	nonce: Nonce,
	deadline: Timestamp,
) -> [u8; 32] {
	let mut buf = Vec::with_capacity(32 * 6);
	buf.extend_from_slice(&keccak_256(RECEIPT_TYPE));
	buf.extend_from_slice(&pad_uint(asset_id as u128));
	buf.extend_from_slice(&pad_uint(amount));
	buf.extend_from_slice(&pad_address(user));
	buf.extend_from_slice(&pad_uint(nonce));
	buf.extend_from_slice(&pad_uint(deadline as u128));
	keccak_256(&buf)
}

/// `keccak256(0x1901 ‖ domain_separator ‖ struct_hash)`, the final digest that gets signed.
pub fn digest(domain_separator: [u8; 32], struct_hash: [u8; 32]) -> [u8; 32] {
	let mut buf = Vec::with_capacity(2 + 32 + 32);
	buf.push(0x19);
	buf.push(0x01);
	buf.extend_from_slice(&domain_separator);
	buf.extend_from_slice(&struct_hash);
	keccak_256(&buf)
}
