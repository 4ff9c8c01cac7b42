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

use codec::{alloc::string::ToString, Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_core::{ecdsa, ed25519, H160};
use sp_io::hashing::{blake2_256, keccak_256};
use sp_std::vec::Vec;

#[derive(
	Eq, PartialEq, Copy, Clone, Encode, Decode, TypeInfo, MaxEncodedLen, Default, PartialOrd, Ord,
)]
pub struct AccountId20(pub [u8; 20]);

impl_serde::impl_fixed_hash_serde!(AccountId20, 20);

#[cfg(feature = "std")]
impl std::fmt::Display for AccountId20 {
	// TODO: This is a pretty quck-n-dirty implementation. Perhaps we should add
	// checksum casing here? I bet there is a crate for that.
	// Maybe this one https://github.com/miguelmota/rust-eth-checksum
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl core::fmt::Debug for AccountId20 {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{:?}", H160(self.0))
	}
}

impl From<[u8; 20]> for AccountId20 {
	fn from(bytes: [u8; 20]) -> Self {
		Self(bytes)
	}
}

impl From<AccountId20> for [u8; 20] {
	fn from(value: AccountId20) -> [u8; 20] {
		value.0
	}
}

impl From<H160> for AccountId20 {
	fn from(h160: H160) -> Self {
		Self(h160.0)
	}
}

impl TryFrom<ecdsa::Public> for AccountId20 {
	type Error = &'static str;

	fn try_from(public: ecdsa::Public) -> Result<Self, Self::Error> {
		let decompressed = libsecp256k1::PublicKey::parse_slice(
			&public.0,
			Some(libsecp256k1::PublicKeyFormat::Compressed),
		)
		.map_err(|_| "Wrong compressed public key provided")?
		.serialize();
		let mut m = [0u8; 64];
		m.copy_from_slice(&decompressed[1..65]);
		let account = H160(keccak_256(&m)[12..].try_into().map_err(|_| "Invalid account id")?);
		Ok(Self(account.0))
	}
}

impl TryFrom<ed25519::Public> for AccountId20 {
	type Error = &'static str;

	fn try_from(public: ed25519::Public) -> Result<Self, Self::Error> {
		let account =
			H160(keccak_256(&public.0)[12..].try_into().map_err(|_| "Invalid account id")?);
		Ok(Self(account.0))
	}
}

impl From<AccountId20> for H160 {
	fn from(value: AccountId20) -> H160 {
		H160(value.0)
	}
}

#[cfg(feature = "std")]
impl std::str::FromStr for AccountId20 {
	type Err = &'static str;
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		H160::from_str(input).map(Into::into).map_err(|_| "invalid hex address.")
	}
}

#[derive(
	Eq, PartialEq, Clone, Encode, Decode, sp_core::RuntimeDebug, TypeInfo, Serialize, Deserialize,
)]
pub struct EthereumSignature(pub ecdsa::Signature);

impl From<ecdsa::Signature> for EthereumSignature {
	fn from(x: ecdsa::Signature) -> Self {
		EthereumSignature(x)
	}
}

impl sp_runtime::traits::Verify for EthereumSignature {
	type Signer = EthereumSigner;

	/// Verify this signature is for `msg` produced by `signer`
	///
	/// As a fallback checks if the signature verifies using Ethereum's 'personal sign' scheme
	/// `keccak256(prefix + message.len() + message)`
	fn verify<L: sp_runtime::traits::Lazy<[u8]>>(&self, mut msg: L, signer: &AccountId20) -> bool {
		let message = msg.get();
		let m = keccak_256(message);
		// Standard signature
		if verify_signature(self.0.as_ref(), &m, signer) {
			return true;
		}

		// Ethereum signed signature
		let m = keccak_256(ethereum_signed_message(message).as_slice());
		if verify_signature(self.0.as_ref(), &m, signer) {
			return true;
		}

		// Try blake2_256 hashing the message, this is to prevent invalid characters showing in
		// Metamask
		let m = keccak_256(ethereum_signed_message(&blake2_256(message)[..]).as_slice());
		verify_signature(self.0.as_ref(), &m, signer)
	}
}

pub fn verify_signature(signature: &[u8; 65], message: &[u8; 32], signer: &AccountId20) -> bool {
	match sp_io::crypto::secp256k1_ecdsa_recover(signature, message) {
		Ok(pubkey) => {
			AccountId20(keccak_256(&pubkey)[12..].try_into().expect("Expected 20 bytes")) == *signer
		},
		Err(sp_io::EcdsaVerifyError::BadRS) => {
			log::error!(target: "evm", "Error recovering: Incorrect value of R or S");
			false
		},
		Err(sp_io::EcdsaVerifyError::BadV) => {
			log::error!(target: "evm", "Error recovering: Incorrect value of V");
			false
		},
		Err(sp_io::EcdsaVerifyError::BadSignature) => {
			log::error!(target: "evm", "Error recovering: Invalid signature");
			false
		},
	}
}

/// Constructs the message that Ethereum RPC's `ethereum_sign` and `eth_sign` would sign.
pub fn ethereum_signed_message(message: &[u8]) -> Vec<u8> {
	let mut v = b"\x19Ethereum Signed Message:\n".to_vec();
	v.extend(message.len().to_string().as_bytes());
	v.extend_from_slice(message);
	v
}

/// Public key for an Ethereum / Moonbeam compatible account
#[derive(
	Eq, PartialEq, Ord, PartialOrd, Clone, Encode, Decode, sp_core::RuntimeDebug, TypeInfo,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EthereumSigner([u8; 20]);

impl sp_runtime::traits::IdentifyAccount for EthereumSigner {
	type AccountId = AccountId20;
	fn into_account(self) -> AccountId20 {
		AccountId20(self.0)
	}
}

impl From<[u8; 20]> for EthereumSigner {
	fn from(x: [u8; 20]) -> Self {
		EthereumSigner(x)
	}
}

impl From<ecdsa::Public> for EthereumSigner {
	fn from(x: ecdsa::Public) -> Self {
		let decompressed = libsecp256k1::PublicKey::parse_slice(
			&x.0,
			Some(libsecp256k1::PublicKeyFormat::Compressed),
		)
		.expect("Wrong compressed public key provided")
		.serialize();
		let mut m = [0u8; 64];
		m.copy_from_slice(&decompressed[1..65]);
		let account = H160(keccak_256(&m)[12..].try_into().expect("Expected 20 bytes"));
		EthereumSigner(account.into())
	}
}

impl From<libsecp256k1::PublicKey> for EthereumSigner {
	fn from(x: libsecp256k1::PublicKey) -> Self {
		let mut m = [0u8; 64];
		m.copy_from_slice(&x.serialize()[1..65]);
		let account = H160(keccak_256(&m)[12..].try_into().expect("Expected 20 bytes"));
		EthereumSigner(account.into())
	}
}

#[cfg(feature = "std")]
impl std::fmt::Display for EthereumSigner {
	fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(fmt, "ethereum signature: {:?}", H160::from_slice(&self.0))
	}
}
