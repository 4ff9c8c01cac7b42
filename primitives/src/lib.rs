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

//! Common types shared across the revenue-share pallets, runtime glue, and tests
#![cfg_attr(not(feature = "std"), no_std)]

pub use eip712::*;
pub use roles::*;
pub use signature::*;
pub use types::*;

pub mod eip712;
pub mod roles;
mod signature;
#[cfg(feature = "std")]
pub mod test_utils;

pub mod types {
	use crate::signature::EthereumSignature;
	use sp_runtime::traits::{IdentifyAccount, Verify};

	/// An index to a block.
	pub type BlockNumber = u32;

	/// Alias to the signature scheme accepted for signed extrinsics on the chain.
	pub type Signature = EthereumSignature;

	/// Some way of identifying an account on the chain. We intentionally make it equivalent
	/// to the public key of our transaction signing scheme.
	pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

	/// Balance of an account, denominated in the smallest unit of the payment asset.
	pub type Balance = u128;

	/// Index of a transaction in the chain.
	pub type Index = u32;

	/// A hash of some data used by the chain.
	pub type Hash = sp_core::H256;

	/// Identifies a registered asset within the directory/provenance graph.
	pub type AssetId = u64;

	/// Identifies a single escrowed payment.
	pub type PaymentId = u64;

	/// A role identifier: keccak256 of the role's ASCII name, mirroring OpenZeppelin's
	/// `AccessControl` convention.
	pub type RoleId = [u8; 32];

	/// A monotonically increasing per-account replay counter.
	pub type Nonce = u128;

	/// Unix timestamp, in seconds.
	pub type Timestamp = u64;

	/// Ethereum-style address, used as the recovered signer of a usage receipt.
	pub type EthAddress = sp_core::H160;

	/// Denominator for basis-point (bps) fee and weight calculations. 10_000 bps == 100%.
	pub const BPS_DENOMINATOR: u16 = 10_000;

	/// Upper bound on the protocol fee FeeTreasury may charge, in bps.
	pub const MAX_FEE_BPS: u16 = 1_000;
}
