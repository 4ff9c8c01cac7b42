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

//! # Pallet Provenance Graph
//!
//! Records which accounts (and, transitively, which parent assets) an asset's revenue must
//! be shared with, and freezes that graph before SplitterFactory is allowed to materialize
//! it into a payment splitter. An asset's graph is mutable only up to the point its owner
//! calls `finalize`; after that every downstream payment is computed against a fixed set of
//! weights, by design.
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod types;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use revshare_pallet_common::{AssetDirectory, ProvenanceGraphInspect, RolesProvider};
use revshare_primitives::{roles, AssetId, BPS_DENOMINATOR};
use sp_std::vec::Vec;
use types::{ContributorEdge, ParentEdge};

const LOG_TARGET: &str = "provenance-graph";

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
		type Roles: RolesProvider<Self::AccountId>;
		type AssetDirectory: AssetDirectory<Self::AccountId>;
		/// Bound on the number of edges (contributor + parent) a single asset may carry.
		type MaxEdgesPerAsset: Get<u32>;
	}

	#[pallet::storage]
	#[pallet::getter(fn contributor_edges)]
	pub type ContributorEdges<T: Config> = StorageMap<
		_,
		Twox64Concat,
		AssetId,
		BoundedVec<ContributorEdge<T::AccountId>, T::MaxEdgesPerAsset>,
		ValueQuery,
	>;

	#[pallet::storage]
	#[pallet::getter(fn parent_edges)]
	pub type ParentEdges<T: Config> = StorageMap<
		_,
		Twox64Concat,
		AssetId,
		BoundedVec<ParentEdge, T::MaxEdgesPerAsset>,
		ValueQuery,
	>;

	#[pallet::storage]
	#[pallet::getter(fn total_bps)]
	pub type TotalBps<T: Config> = StorageMap<_, Twox64Concat, AssetId, u16, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn is_finalized)]
	pub type Finalized<T: Config> = StorageMap<_, Twox64Concat, AssetId, bool, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		ContributorEdgeAdded { asset_id: AssetId, contributor: T::AccountId, weight_bps: u16 },
		ParentEdgeAdded { asset_id: AssetId, parent_asset: AssetId, weight_bps: u16 },
		GraphFinalized { asset_id: AssetId },
	}

	#[pallet::error]
	pub enum Error<T> {
		AssetDoesNotExist,
		NotAssetOwner,
		GraphIsFinalized,
		InvalidWeight,
		TotalWeightExceeded,
		TooManyEdges,
		ParentAssetDoesNotExist,
		NoContributors,
		NotAContributor,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Adds a direct contributor entitlement. Callable by the asset owner or an account
		/// holding `CONTRIBUTOR_ADMIN`, up until the graph is finalized.
		#[pallet::call_index(0)]
		#[pallet::weight(10_000)]
		pub fn add_contributor_edge(
			origin: OriginFor<T>,
			asset_id: AssetId,
			contributor: T::AccountId,
			weight_bps: u16,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			Self::ensure_can_mutate(asset_id, &caller)?;
			ensure!(weight_bps > 0, Error::<T>::InvalidWeight);
			ensure!(
				T::Roles::has_role(roles::contributor(), &contributor),
				Error::<T>::NotAContributor
			);

			let new_total = Self::bump_total_bps(asset_id, weight_bps)?;

			ContributorEdges::<T>::try_mutate(asset_id, |edges| {
				edges
					.try_push(ContributorEdge { contributor: contributor.clone(), weight_bps })
					.map_err(|_| Error::<T>::TooManyEdges)
			})?;
			TotalBps::<T>::insert(asset_id, new_total);

			Self::deposit_event(Event::ContributorEdgeAdded { asset_id, contributor, weight_bps });
			Ok(())
		}

		/// Adds a parent-asset edge, cascading a share of this asset's revenue to another
		/// asset's own splitter.
		#[pallet::call_index(1)]
		#[pallet::weight(10_000)]
		pub fn add_parent_edge(
			origin: OriginFor<T>,
			asset_id: AssetId,
			parent_asset: AssetId,
			weight_bps: u16,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			Self::ensure_can_mutate(asset_id, &caller)?;
			ensure!(weight_bps > 0, Error::<T>::InvalidWeight);
			ensure!(T::AssetDirectory::exists(parent_asset), Error::<T>::ParentAssetDoesNotExist);

			let new_total = Self::bump_total_bps(asset_id, weight_bps)?;

			ParentEdges::<T>::try_mutate(asset_id, |edges| {
				edges
					.try_push(ParentEdge { parent_asset, weight_bps })
					.map_err(|_| Error::<T>::TooManyEdges)
			})?;
			TotalBps::<T>::insert(asset_id, new_total);

			Self::deposit_event(Event::ParentEdgeAdded { asset_id, parent_asset, weight_bps });
			Ok(())
		}

		/// Freezes `asset_id`'s graph. Irreversible: once finalized, edges can never be
		/// added, removed, or reweighted.
		#[pallet::call_index(2)]
		#[pallet::weight(10_000)]
		pub fn finalize(origin: OriginFor<T>, asset_id: AssetId) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			Self::ensure_can_mutate(asset_id, &caller)?;
			ensure!(
				!ContributorEdges::<T>::get(asset_id).is_empty(),
				Error::<T>::NoContributors
			);

			Finalized::<T>::insert(asset_id, true);
			Self::deposit_event(Event::GraphFinalized { asset_id });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	fn ensure_can_mutate(asset_id: AssetId, caller: &T::AccountId) -> DispatchResult {
		ensure!(!Finalized::<T>::get(asset_id), Error::<T>::GraphIsFinalized);
		let owner = T::AssetDirectory::owner_of(asset_id).ok_or(Error::<T>::AssetDoesNotExist)?;
		ensure!(
			&owner == caller || T::Roles::has_role(roles::contributor_admin(), caller),
			Error::<T>::NotAssetOwner
		);
		Ok(())
	}

	fn bump_total_bps(asset_id: AssetId, weight_bps: u16) -> Result<u16, DispatchError> {
		TotalBps::<T>::get(asset_id)
			.checked_add(weight_bps)
			.filter(|total| *total <= BPS_DENOMINATOR)
			.ok_or_else(|| Error::<T>::TotalWeightExceeded.into())
	}
}

impl<T: Config> ProvenanceGraphInspect<T::AccountId> for Pallet<T> {
	fn is_finalized(asset_id: AssetId) -> bool {
		Pallet::<T>::is_finalized(asset_id)
	}

	fn contributor_edges(asset_id: AssetId) -> Vec<(T::AccountId, u16)> {
		Pallet::<T>::contributor_edges(asset_id)
			.into_iter()
			.map(|edge| (edge.contributor, edge.weight_bps))
			.collect()
	}
}
