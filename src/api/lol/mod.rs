use std::sync::Arc;

use super::client::ApiClient;

pub mod champion_mastery_v4;
pub mod champion_v3;
pub mod spectator_v4;
pub mod summoner_v4;

pub use champion_mastery_v4::ChampionMasteryV4Api;
pub use champion_v3::ChampionV3Api;
pub use spectator_v4::SpectatorV4Api;
pub use summoner_v4::SummonerV4Api;

/// Every LoL API exposed by the crate, sharing a single [`ApiClient`].
#[derive(Debug, Clone)]
pub struct LolApi {
    pub champion: ChampionV3Api,
    pub champion_mastery: ChampionMasteryV4Api,
    pub spectator: SpectatorV4Api,
    pub summoner: SummonerV4Api,
}

impl LolApi {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self {
            champion: ChampionV3Api::new(api_client.clone()),
            champion_mastery: ChampionMasteryV4Api::new(api_client.clone()),
            spectator: SpectatorV4Api::new(api_client.clone()),
            summoner: SummonerV4Api::new(api_client),
        }
    }
}
