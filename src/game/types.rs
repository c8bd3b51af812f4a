// Shared enums and helper structs used by the world and the front end

/// Game state enum for tracking the current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
}

/// Keys held down during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Things that happened during a tick that the front end may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    EnemyDestroyed { enemy_id: u32, points: u32 },
    PlayerHit { lives_left: u32 },
    WaveCleared { wave: u32 },
    GameOver { score: u32, wave: u32 },
}
