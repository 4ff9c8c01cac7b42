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

//! # Pallet Splitter Factory
//!
//! Snapshots a finalized provenance graph into an immutable payee/shares table, and gives
//! every payee a `release` call that pulls their pro-rata share out of the splitter's pot,
//! net of whatever has already been released to them. Mirrors OpenZeppelin's
//! `PaymentSplitter`: no rescaling, no residual distribution, shares frozen for good at
//! creation time.
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;
pub mod types;

use frame_support::{pallet_prelude::*, PalletId};
use frame_system::pallet_prelude::*;
use revshare_pallet_common::{
	PaymentCurrency, ProvenanceGraphInspect, SplitterInspect, SplitterPot,
};
use revshare_primitives::{AssetId, Balance};
use sp_runtime::traits::AccountIdConversion;
use sp_std::vec::Vec;
use types::Payee;

const LOG_TARGET: &str = "splitter-factory";

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
		type ProvenanceGraph: ProvenanceGraphInspect<Self::AccountId>;
		type Currency: PaymentCurrency<Self::AccountId>;
		/// The single asset id all payments and releases are denominated in.
		type PaymentAssetId: Get<AssetId>;
		/// Sovereign pallet account whose sub-accounts (keyed by asset id) custody each
		/// splitter's pot.
		type PalletId: Get<PalletId>;
		/// Bound on the number of payees a single splitter may snapshot.
		type MaxPayees: Get<u32>;
	}

	#[pallet::storage]
	#[pallet::getter(fn payees)]
	pub type Splitters<T: Config> =
		StorageMap<_, Twox64Concat, AssetId, BoundedVec<Payee<T::AccountId>, T::MaxPayees>>;

	#[pallet::storage]
	#[pallet::getter(fn total_shares)]
	pub type TotalShares<T: Config> = StorageMap<_, Twox64Concat, AssetId, u16, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn total_released)]
	pub type TotalReleased<T: Config> = StorageMap<_, Twox64Concat, AssetId, Balance, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn released)]
	pub type Released<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		AssetId,
		Blake2_128Concat,
		T::AccountId,
		Balance,
		ValueQuery,
	>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		SplitterCreated {
			asset_id: AssetId,
			payees: Vec<T::AccountId>,
			shares: Vec<u16>,
		},
		PayeeReleased {
			asset_id: AssetId,
			payee: T::AccountId,
			amount: Balance,
		},
	}

	#[pallet::error]
	pub enum Error<T> {
		GraphNotFinalized,
		NoContributors,
		SplitterAlreadyExists,
		SplitterNotCreated,
		TooManyPayees,
		NotAPayee,
		NothingToRelease,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Materializes `asset_id`'s finalized provenance graph into an immutable splitter.
		/// Callable once per asset, by anyone — the graph itself is already access-controlled.
		#[pallet::call_index(0)]
		#[pallet::weight(10_000)]
		pub fn create_splitter(origin: OriginFor<T>, asset_id: AssetId) -> DispatchResult {
			ensure_signed(origin)?;
			ensure!(Splitters::<T>::get(asset_id).is_none(), Error::<T>::SplitterAlreadyExists);
			ensure!(T::ProvenanceGraph::is_finalized(asset_id), Error::<T>::GraphNotFinalized);

			let edges = T::ProvenanceGraph::contributor_edges(asset_id);
			ensure!(!edges.is_empty(), Error::<T>::NoContributors);

			let total_shares: u16 = edges.iter().map(|(_, w)| *w).sum();
			let payees: BoundedVec<Payee<T::AccountId>, T::MaxPayees> = edges
				.iter()
				.cloned()
				.map(|(account, shares)| Payee { account, shares })
				.collect::<Vec<_>>()
				.try_into()
				.map_err(|_| Error::<T>::TooManyPayees)?;

			let (accounts, shares): (Vec<_>, Vec<_>) =
				edges.into_iter().map(|(a, s)| (a, s)).unzip();

			Splitters::<T>::insert(asset_id, payees);
			TotalShares::<T>::insert(asset_id, total_shares);

			Self::deposit_event(Event::SplitterCreated { asset_id, payees: accounts, shares });
			Ok(())
		}

		/// Releases `payee`'s outstanding pro-rata share of `asset_id`'s splitter pot.
		/// Callable by anyone, on behalf of any payee — the transfer always lands with the
		/// payee, never the caller.
		#[pallet::call_index(1)]
		#[pallet::weight(10_000)]
		pub fn release(
			origin: OriginFor<T>,
			asset_id: AssetId,
			payee: T::AccountId,
		) -> DispatchResult {
			ensure_signed(origin)?;
			let table = Splitters::<T>::get(asset_id).ok_or(Error::<T>::SplitterNotCreated)?;
			let entry =
				table.iter().find(|p| p.account == payee).ok_or(Error::<T>::NotAPayee)?;
			let total_shares = TotalShares::<T>::get(asset_id) as u128;

			let pot = Self::pot_account_of(asset_id);
			let pot_balance = T::Currency::balance_of(T::PaymentAssetId::get(), &pot);
			let already_released = Released::<T>::get(asset_id, &payee);
			let total_received = pot_balance.saturating_add(TotalReleased::<T>::get(asset_id));

			let entitled = total_received
				.saturating_mul(entry.shares as u128)
				.checked_div(total_shares)
				.unwrap_or(0);
			let owed = entitled.saturating_sub(already_released);
			ensure!(owed > 0, Error::<T>::NothingToRelease);

			T::Currency::transfer(T::PaymentAssetId::get(), &pot, &payee, owed)?;

			Released::<T>::insert(asset_id, &payee, already_released.saturating_add(owed));
			TotalReleased::<T>::mutate(asset_id, |r| *r = r.saturating_add(owed));

			Self::deposit_event(Event::PayeeReleased { asset_id, payee, amount: owed });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	pub fn pot_account_of(asset_id: AssetId) -> T::AccountId {
		T::PalletId::get().into_sub_account_truncating(asset_id)
	}
}

impl<T: Config> SplitterInspect for Pallet<T> {
	fn splitter_of(asset_id: AssetId) -> Option<AssetId> {
		Splitters::<T>::get(asset_id).is_some().then_some(asset_id)
	}
}

impl<T: Config> SplitterPot<T::AccountId> for Pallet<T> {
	fn pot_account_of(asset_id: AssetId) -> T::AccountId {
		Pallet::<T>::pot_account_of(asset_id)
	}
}
