use std::sync::Arc;

use serde::Deserialize;

use crate::{
    api::{client::ApiClient, route::RouteTemplate},
    region::Region,
    types::ApiResponse,
};

pub const CHAMPION_ROTATIONS: RouteTemplate =
    RouteTemplate::new("/lol/platform/v3/champion-rotations");

#[derive(Debug, Clone)]
pub struct ChampionV3Api(Arc<ApiClient>);

impl ChampionV3Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Champions currently free to play, including the pool for new players.
    pub async fn get_champion_rotations(&self, region: Region) -> ApiResponse<ChampionInfo> {
        tracing::trace!("[RIOT::CHAMPION-V3] get_champion_rotations in {:?}", region);

        self.0.execute(region, CHAMPION_ROTATIONS, &[]).await
    }
}

/// Representation of the champion rotation response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionInfo {
    pub max_new_player_level: i32,
    pub free_champion_ids_for_new_players: Vec<i32>,
    pub free_champion_ids: Vec<i32>,
}
