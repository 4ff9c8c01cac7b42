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

//! Cross-pallet traits binding together RolesGate, AssetDirectory, ProvenanceGraph,
//! SplitterFactory, FeeTreasury, ReceiptVerifier and Escrow without any pallet depending
//! on another pallet's crate directly.
#![cfg_attr(not(feature = "std"), no_std)]

pub use frame_support::log as logger;
use frame_support::dispatch::{DispatchError, DispatchResult};
use revshare_primitives::{AssetId, Balance, PaymentId, RoleId};
use sp_std::vec::Vec;

pub mod currency;
#[cfg(feature = "std")]
pub mod test_utils;

pub use currency::AssetsCurrency;
#[cfg(feature = "std")]
pub use test_utils::test_prelude;

/// Syntactic sugar for logging. The caller must define `const LOG_TARGET: &str = "..."`.
#[macro_export]
macro_rules! log {
	($level:tt, $patter:expr $(, $values:expr)* $(,)?) => {
		revshare_pallet_common::logger::$level!(
			target: crate::LOG_TARGET,
			$patter $(, $values)*
		)
	};
}

/// Read access to RolesGate's role membership, used by every other component to gate its
/// privileged operations without depending on `pallet-roles` directly.
pub trait RolesProvider<AccountId> {
	/// Returns true if `who` currently holds `role`.
	fn has_role(role: RoleId, who: &AccountId) -> bool;
}

/// Read access to the external asset directory (`IAssetToken` in the wider system), which
/// this workspace represents with a minimal `pallet-asset-directory` stand-in.
pub trait AssetDirectory<AccountId> {
	/// Returns the current owner of `asset_id`, if it has been registered.
	fn owner_of(asset_id: AssetId) -> Option<AccountId>;

	/// Returns true if `asset_id` has been registered in the directory.
	fn exists(asset_id: AssetId) -> bool {
		Self::owner_of(asset_id).is_some()
	}
}

/// Read access into a finalized provenance graph, consumed by SplitterFactory when it
/// materializes a splitter's payee/weight table.
pub trait ProvenanceGraphInspect<AccountId> {
	/// Returns true once `asset_id`'s contributor graph has been finalized and can no longer
	/// be mutated.
	fn is_finalized(asset_id: AssetId) -> bool;

	/// Returns the direct contributor edges for `asset_id` as `(contributor, weight_bps)`.
	fn contributor_edges(asset_id: AssetId) -> Vec<(AccountId, u16)>;
}

/// Read access to a materialized splitter, consumed by ReceiptVerifier and Escrow.
pub trait SplitterInspect {
	/// Returns `Some(asset_id)` if a splitter has been created for `asset_id`. The asset id
	/// itself doubles as the splitter's opaque handle since splitters are 1:1 with assets.
	fn splitter_of(asset_id: AssetId) -> Option<AssetId>;
}

/// Resolves a splitter's custody account, the sub-account Escrow pays fee-split proceeds
/// into and payees later call `release` to draw down from.
pub trait SplitterPot<AccountId> {
	fn pot_account_of(asset_id: AssetId) -> AccountId;
}

/// Read access to FeeTreasury's current protocol fee configuration.
pub trait FeeTreasuryInspect<AccountId> {
	/// Current protocol fee, in bps of a released payment.
	fn fee_bps() -> u16;
	/// Destination account for the protocol fee's share. `None` disables fee collection.
	fn treasury_sink() -> Option<AccountId>;
}

/// Escrow's entry point for ReceiptVerifier to record a payment that has just been pulled
/// into Escrow's custody account.
pub trait EscrowApi<AccountId> {
	/// Escrow's sovereign account, where ReceiptVerifier should direct the pulled payment.
	fn pot_account() -> AccountId;

	/// Records a new held payment. Assumes the funds already sit in `pot_account()`.
	fn hold_payment(
		asset_id: AssetId,
		user: AccountId,
		amount: Balance,
		splitter_ref: AssetId,
	) -> Result<PaymentId, DispatchError>;
}

/// A fungible asset interface wide enough to cover pull payments (`transfer_from`), direct
/// custody transfers (`transfer`), and balance inspection, implemented generically over
/// `pallet_assets`/`pallet_assets_ext`-style `fungibles` traits at the runtime level.
pub trait PaymentCurrency<AccountId> {
	/// Pulls `amount` of `asset_id` from `owner` into `dest`, authorized by a standing
	/// approval `owner` granted to `delegate`. Mirrors ERC-20's `transferFrom`.
	fn transfer_from(
		asset_id: AssetId,
		owner: &AccountId,
		delegate: &AccountId,
		dest: &AccountId,
		amount: Balance,
	) -> DispatchResult;

	/// Moves `amount` of `asset_id` directly from `source` to `dest`, used for custody
	/// accounts (Escrow's pot, a splitter's pot) that the pallet itself controls.
	fn transfer(
		asset_id: AssetId,
		source: &AccountId,
		dest: &AccountId,
		amount: Balance,
	) -> DispatchResult;

	/// The free balance of `asset_id` held by `who`.
	fn balance_of(asset_id: AssetId, who: &AccountId) -> Balance;
}
