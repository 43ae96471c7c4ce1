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

pub const MASTERY_BY_ENCRYPTED_SUMMONER_ID: RouteTemplate = RouteTemplate::new(
    "/lol/champion-mastery/v4/champion-masteries/by-summoner/{encryptedSummonerId}",
);
pub const MASTERY_BY_ENCRYPTED_SUMMONER_ID_AND_CHAMPION_ID: RouteTemplate = RouteTemplate::new(
    "/lol/champion-mastery/v4/champion-masteries/by-summoner/{encryptedSummonerId}/by-champion/{championId}",
);
pub const MASTERY_SCORE_BY_ENCRYPTED_SUMMONER_ID: RouteTemplate =
    RouteTemplate::new("/lol/champion-mastery/v4/scores/by-summoner/{encryptedSummonerId}");

#[derive(Debug, Clone)]
pub struct ChampionMasteryV4Api(Arc<ApiClient>);

impl ChampionMasteryV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// All champion mastery entries of a player, sorted by champion points descending.
    pub async fn get_champion_masteries(
        &self,
        region: Region,
        encrypted_summoner_id: String,
    ) -> ApiResponse<Vec<ChampionMasteryDto>> {
        tracing::trace!(
            "[RIOT::CHAMPION-MASTERY-V4] get_champion_masteries {} in {:?}",
            encrypted_summoner_id,
            region
        );

        self.0
            .execute(
                region,
                MASTERY_BY_ENCRYPTED_SUMMONER_ID,
                &[PathParam::new("encryptedSummonerId", encrypted_summoner_id)],
            )
            .await
    }

    pub async fn get_champion_mastery(
        &self,
        region: Region,
        encrypted_summoner_id: String,
        champion_id: String,
    ) -> ApiResponse<ChampionMasteryDto> {
        tracing::trace!(
            "[RIOT::CHAMPION-MASTERY-V4] get_champion_mastery {} / {} in {:?}",
            encrypted_summoner_id,
            champion_id,
            region
        );

        self.0
            .execute(
                region,
                MASTERY_BY_ENCRYPTED_SUMMONER_ID_AND_CHAMPION_ID,
                &[
                    PathParam::new("encryptedSummonerId", encrypted_summoner_id),
                    PathParam::new("championId", champion_id),
                ],
            )
            .await
    }

    /// Sum of the mastery levels of every champion played.
    pub async fn get_mastery_score(
        &self,
        region: Region,
        encrypted_summoner_id: String,
    ) -> ApiResponse<i32> {
        tracing::trace!(
            "[RIOT::CHAMPION-MASTERY-V4] get_mastery_score {} in {:?}",
            encrypted_summoner_id,
            region
        );

        self.0
            .execute(
                region,
                MASTERY_SCORE_BY_ENCRYPTED_SUMMONER_ID,
                &[PathParam::new("encryptedSummonerId", encrypted_summoner_id)],
            )
            .await
    }
}

/// Representation of the champion mastery response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i32,
    /// Epoch milliseconds.
    pub last_play_time: i64,
    pub champion_points_since_last_level: i64,
    pub champion_points_until_next_level: i64,
    #[serde(default)]
    pub chest_granted: bool,
    #[serde(default)]
    pub tokens_earned: i32,
    pub summoner_id: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::client::tests::{CountingCredentials, FakeTransport};

    fn mastery_body() -> serde_json::Value {
        json!({
            "championId": 157,
            "championLevel": 7,
            "championPoints": 254_033,
            "lastPlayTime": 1_600_000_000_000_i64,
            "championPointsSinceLastLevel": 232_433,
            "championPointsUntilNextLevel": 0,
            "chestGranted": true,
            "tokensEarned": 0,
            "summonerId": "enc-id",
        })
    }

    fn api_with(transport: Arc<FakeTransport>) -> ChampionMasteryV4Api {
        let client = ApiClient::new(Arc::new(CountingCredentials::default()), transport);
        ChampionMasteryV4Api::new(client.into())
    }

    #[tokio::test]
    async fn get_champion_masteries_targets_summoner() {
        let transport = Arc::new(FakeTransport::ok(json!([mastery_body()])));
        let api = api_with(transport.clone());

        let masteries = api
            .get_champion_masteries(Region::Euw, "enc-id".to_string())
            .await
            .unwrap();

        assert_eq!(masteries.len(), 1);
        assert_eq!(masteries[0].champion_id, 157);
        assert_eq!(
            transport.urls(),
            vec!["EUW.league.api.com/lol/champion-mastery/v4/champion-masteries/by-summoner/enc-id"]
        );
    }

    #[tokio::test]
    async fn get_champion_mastery_fills_both_placeholders() {
        let transport = Arc::new(FakeTransport::ok(mastery_body()));
        let api = api_with(transport.clone());

        let mastery = api
            .get_champion_mastery(Region::Na, "enc-id".to_string(), "157".to_string())
            .await
            .unwrap();

        assert_eq!(mastery.champion_level, 7);
        assert!(mastery.chest_granted);
        assert_eq!(
            transport.urls(),
            vec!["NA.league.api.com/lol/champion-mastery/v4/champion-masteries/by-summoner/enc-id/by-champion/157"]
        );
    }

    #[tokio::test]
    async fn get_mastery_score_returns_scalar() {
        let transport = Arc::new(FakeTransport::ok(json!(421)));
        let api = api_with(transport.clone());

        let score = api
            .get_mastery_score(Region::Kr, "enc-id".to_string())
            .await
            .unwrap();

        assert_eq!(score, 421);
        assert_eq!(
            transport.urls(),
            vec!["KR.league.api.com/lol/champion-mastery/v4/scores/by-summoner/enc-id"]
        );
    }
}
