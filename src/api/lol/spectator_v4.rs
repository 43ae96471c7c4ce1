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

pub const ACTIVE_GAME_BY_ENCRYPTED_SUMMONER_ID: RouteTemplate =
    RouteTemplate::new("/lol/spectator/v4/active-games/by-summoner/{encryptedSummonerId}");
pub const FEATURED_GAMES: RouteTemplate = RouteTemplate::new("/lol/spectator/v4/featured-games");

#[derive(Debug, Clone)]
pub struct SpectatorV4Api(Arc<ApiClient>);

impl SpectatorV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Game the player is currently in. The Riot API answers 404 when there is none.
    pub async fn get_active_game(
        &self,
        region: Region,
        encrypted_summoner_id: String,
    ) -> ApiResponse<CurrentGameInfo> {
        tracing::trace!(
            "[RIOT::SPECTATOR-V4] get_active_game {} in {:?}",
            encrypted_summoner_id,
            region
        );

        self.0
            .execute(
                region,
                ACTIVE_GAME_BY_ENCRYPTED_SUMMONER_ID,
                &[PathParam::new("encryptedSummonerId", encrypted_summoner_id)],
            )
            .await
    }

    pub async fn get_featured_games(&self, region: Region) -> ApiResponse<FeaturedGames> {
        tracing::trace!("[RIOT::SPECTATOR-V4] get_featured_games in {:?}", region);

        self.0.execute(region, FEATURED_GAMES, &[]).await
    }
}

/// Representation of a live game.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfo {
    pub game_id: i64,
    pub game_type: String,
    /// Epoch milliseconds.
    pub game_start_time: i64,
    pub map_id: i64,
    /// Seconds since the game started.
    pub game_length: i64,
    pub platform_id: String,
    pub game_mode: String,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampion>,
    pub game_queue_config_id: Option<i64>,
    pub observers: Observer,
    pub participants: Vec<CurrentGameParticipant>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampion {
    pub pick_turn: i32,
    pub champion_id: i64,
    pub team_id: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observer {
    pub encryption_key: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    pub champion_id: i64,
    pub perks: Option<Perks>,
    pub profile_icon_id: i64,
    pub bot: bool,
    pub team_id: i64,
    pub summoner_name: String,
    pub summoner_id: Option<String>,
    pub spell1_id: i64,
    pub spell2_id: i64,
    #[serde(default)]
    pub game_customization_objects: Vec<GameCustomizationObject>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Perks {
    pub perk_ids: Vec<i64>,
    pub perk_style: i64,
    pub perk_sub_style: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameCustomizationObject {
    pub category: String,
    pub content: String,
}

/// Representation of the featured games response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGames {
    pub game_list: Vec<FeaturedGameInfo>,
    /// Suggested delay in seconds before refreshing the list.
    pub client_refresh_interval: Option<i64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGameInfo {
    pub game_mode: String,
    pub game_length: i64,
    pub map_id: i64,
    pub game_type: String,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampion>,
    pub game_id: i64,
    pub observers: Observer,
    pub game_queue_config_id: Option<i64>,
    pub game_start_time: i64,
    pub participants: Vec<FeaturedGameParticipant>,
    pub platform_id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGameParticipant {
    pub bot: bool,
    pub spell2_id: i64,
    pub profile_icon_id: i64,
    pub summoner_name: String,
    pub champion_id: i64,
    pub team_id: i64,
    pub spell1_id: i64,
}
