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

//! # Pallet Receipt Verifier
//!
//! Consumes EIP-712-signed `UsageReceipt` messages from a gateway holding the `VERIFIER`
//! role, pulls the receipt's payment out of the user's pre-approved balance, and hands it
//! off to Escrow. Nonces are bumped before the pull executes, so a reentrant or adversarial
//! token contract can never replay the same receipt twice.
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;
pub mod types;

use frame_support::{pallet_prelude::*, traits::UnixTime, PalletId};
use frame_system::pallet_prelude::*;
use revshare_pallet_common::{EscrowApi, PaymentCurrency, RolesProvider, SplitterInspect};
use revshare_primitives::{
	digest, roles, struct_hash, verify_signature, AssetId, Domain, EthAddress, Nonce,
};
use sp_runtime::traits::AccountIdConversion;
use sp_std::vec::Vec;
use types::{ReceiptSignature, UsageReceipt};

const LOG_TARGET: &str = "receipt-verifier";

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config<AccountId = revshare_primitives::AccountId> {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
		type Roles: RolesProvider<Self::AccountId>;
		type Splitter: SplitterInspect;
		type Escrow: EscrowApi<Self::AccountId>;
		type Currency: PaymentCurrency<Self::AccountId>;
		type UnixTime: UnixTime;
		/// The single asset id all usage receipts are denominated in.
		type PaymentAssetId: Get<AssetId>;
		/// Sovereign account this pallet pulls payments through; users approve this account.
		type PalletId: Get<PalletId>;
		type Eip712Name: Get<Vec<u8>>;
		type Eip712Version: Get<Vec<u8>>;
		type ChainId: Get<u64>;
		type VerifyingContract: Get<EthAddress>;
	}

	#[pallet::storage]
	#[pallet::getter(fn nonce_of)]
	pub type Nonces<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Nonce, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn is_paused)]
	pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		ReceiptConsumed { asset_id: AssetId, user: T::AccountId, amount: revshare_primitives::Balance, nonce: Nonce },
		Paused { by: T::AccountId },
		Unpaused { by: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		ReceiptExpired,
		InvalidNonce,
		InvalidSignature,
		SplitterNotCreated,
		MissingVerifierRole,
		MissingPauserRole,
		Paused,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Verifies `receipt`'s signature and pulls its payment into Escrow. Gated by the
		/// `VERIFIER` role — the caller is the gateway relaying the user's signed message,
		/// never the user itself.
		#[pallet::call_index(0)]
		#[pallet::weight(10_000)]
		pub fn verify_and_pay(
			origin: OriginFor<T>,
			receipt: UsageReceipt<T::AccountId>,
			signature: ReceiptSignature,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(!Paused::<T>::get(), Error::<T>::Paused);
			ensure!(
				T::Roles::has_role(roles::verifier(), &caller),
				Error::<T>::MissingVerifierRole
			);

			let now = T::UnixTime::now().as_secs();
			ensure!(now <= receipt.deadline, Error::<T>::ReceiptExpired);
			ensure!(
				receipt.nonce == Nonces::<T>::get(&receipt.user),
				Error::<T>::InvalidNonce
			);

			let domain = Domain {
				name: T::Eip712Name::get(),
				version: T::Eip712Version::get(),
				chain_id: T::ChainId::get(),
				verifying_contract: T::VerifyingContract::get(),
			};
			let user_address: EthAddress = receipt.user.into();
			let hash = struct_hash(
				receipt.asset_id,
				receipt.amount,
				&user_address,
				receipt.nonce,
				receipt.deadline,
			);
			let message = digest(domain.separator(), hash);
			ensure!(
				verify_signature(&signature, &message, &receipt.user),
				Error::<T>::InvalidSignature
			);

			ensure!(
				T::Splitter::splitter_of(receipt.asset_id).is_some(),
				Error::<T>::SplitterNotCreated
			);

			// Checks-effects-interactions: bump the nonce before any external transfer, so a
			// reentrant token contract can never replay this receipt.
			Nonces::<T>::insert(&receipt.user, receipt.nonce.saturating_add(1));

			let verifier_account = Self::account_id();
			let escrow_pot = T::Escrow::pot_account();
			T::Currency::transfer_from(
				T::PaymentAssetId::get(),
				&receipt.user,
				&verifier_account,
				&escrow_pot,
				receipt.amount,
			)?;

			T::Escrow::hold_payment(
				receipt.asset_id,
				receipt.user.clone(),
				receipt.amount,
				receipt.asset_id,
			)?;

			Self::deposit_event(Event::ReceiptConsumed {
				asset_id: receipt.asset_id,
				user: receipt.user,
				amount: receipt.amount,
				nonce: receipt.nonce,
			});
			Ok(())
		}

		#[pallet::call_index(1)]
		#[pallet::weight(10_000)]
		pub fn pause(origin: OriginFor<T>) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(T::Roles::has_role(roles::pauser(), &caller), Error::<T>::MissingPauserRole);
			Paused::<T>::put(true);
			Self::deposit_event(Event::Paused { by: caller });
			Ok(())
		}

		#[pallet::call_index(2)]
		#[pallet::weight(10_000)]
		pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(T::Roles::has_role(roles::pauser(), &caller), Error::<T>::MissingPauserRole);
			Paused::<T>::put(false);
			Self::deposit_event(Event::Unpaused { by: caller });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	/// The sovereign account users pre-approve to let this pallet pull usage payments out
	/// of their balance on the gateway's behalf.
	pub fn account_id() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}
}
