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

//! [`PaymentCurrency`] realized over `pallet_assets`, so every pallet configures its
//! `Currency` associated type as `AssetsCurrency<Runtime>` instead of hand-rolling transfers.

use crate::PaymentCurrency;
use frame_support::{
	dispatch::DispatchResult,
	traits::tokens::fungibles::{approvals::Transfer as ApprovalTransfer, Inspect, Transfer},
};
use revshare_primitives::{AssetId, Balance};
use sp_std::marker::PhantomData;

pub struct AssetsCurrency<T>(PhantomData<T>);

impl<T> PaymentCurrency<T::AccountId> for AssetsCurrency<T>
where
	T: pallet_assets::Config,
	T::AssetId: From<AssetId>,
	T::Balance: From<Balance> + Into<Balance>,
	pallet_assets::Pallet<T>: ApprovalTransfer<T::AccountId>
		+ Transfer<T::AccountId>
		+ Inspect<T::AccountId, AssetId = T::AssetId, Balance = T::Balance>,
{
	fn transfer_from(
		asset_id: AssetId,
		owner: &T::AccountId,
		delegate: &T::AccountId,
		dest: &T::AccountId,
		amount: Balance,
	) -> DispatchResult {
		<pallet_assets::Pallet<T> as ApprovalTransfer<T::AccountId>>::transfer_approved(
			asset_id.into(),
			owner,
			delegate,
			dest,
			amount.into(),
		)
	}

	fn transfer(
		asset_id: AssetId,
		source: &T::AccountId,
		dest: &T::AccountId,
		amount: Balance,
	) -> DispatchResult {
		<pallet_assets::Pallet<T> as Transfer<T::AccountId>>::transfer(
			asset_id.into(),
			source,
			dest,
			amount.into(),
			false,
		)
		.map(|_| ())
	}

	fn balance_of(asset_id: AssetId, who: &T::AccountId) -> Balance {
		<pallet_assets::Pallet<T> as Inspect<T::AccountId>>::balance(asset_id.into(), who).into()
	}
}
