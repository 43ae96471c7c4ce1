use std::sync::Arc;

use serde::Deserialize;

use crate::{
    api::{
        client::ApiClient,
        route::{PathParam, RouteTemplate},
    },
    region::Region,
    types::ApiResponse,
};

pub const SUMMONER_BY_NAME: RouteTemplate =
    RouteTemplate::new("/lol/summoner/v4/summoners/by-name/{summonerName}");
pub const SUMMONER_BY_ACCOUNT: RouteTemplate =
    RouteTemplate::new("/lol/summoner/v4/summoners/by-account/{encryptedAccountId}");
pub const SUMMONER_BY_PUUID: RouteTemplate =
    RouteTemplate::new("/lol/summoner/v4/summoners/by-puuid/{encryptedPUUID}");
pub const SUMMONER_BY_ID: RouteTemplate =
    RouteTemplate::new("/lol/summoner/v4/summoners/{encryptedSummonerId}");

#[derive(Debug, Clone)]
pub struct SummonerV4Api(Arc<ApiClient>);

impl SummonerV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_by_name(
        &self,
        region: Region,
        summoner_name: String,
    ) -> ApiResponse<SummonerDto> {
        tracing::trace!("[RIOT::SUMMONER-V4] get_by_name {} in {:?}", summoner_name, region);

        self.0
            .execute(
                region,
                SUMMONER_BY_NAME,
                &[PathParam::new("summonerName", summoner_name)],
            )
            .await
    }

    pub async fn get_by_account(
        &self,
        region: Region,
        encrypted_account_id: String,
    ) -> ApiResponse<SummonerDto> {
        tracing::trace!(
            "[RIOT::SUMMONER-V4] get_by_account {} in {:?}",
            encrypted_account_id,
            region
        );

        self.0
            .execute(
                region,
                SUMMONER_BY_ACCOUNT,
                &[PathParam::new("encryptedAccountId", encrypted_account_id)],
            )
            .await
    }

    pub async fn get_by_puuid(
        &self,
        region: Region,
        encrypted_puuid: String,
    ) -> ApiResponse<SummonerDto> {
        tracing::trace!("[RIOT::SUMMONER-V4] get_by_puuid {} in {:?}", encrypted_puuid, region);

        self.0
            .execute(
                region,
                SUMMONER_BY_PUUID,
                &[PathParam::new("encryptedPUUID", encrypted_puuid)],
            )
            .await
    }

    pub async fn get_by_id(
        &self,
        region: Region,
        encrypted_summoner_id: String,
    ) -> ApiResponse<SummonerDto> {
        tracing::trace!(
            "[RIOT::SUMMONER-V4] get_by_id {} in {:?}",
            encrypted_summoner_id,
            region
        );

        self.0
            .execute(
                region,
                SUMMONER_BY_ID,
                &[PathParam::new("encryptedSummonerId", encrypted_summoner_id)],
            )
            .await
    }
}

/// Representation of the summoner response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub name: String,
    pub profile_icon_id: i32,
    /// Epoch milliseconds of the last profile change.
    #[serde(default)]
    pub revision_date: i64,
    pub summoner_level: i64,
}
