#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use dungeon_clock::{
    render::{Renderer, Screen},
    services::{Direction, FightReply, GameService, Inventory, EnemyCount, ServiceError, StatusReport},
    state::Affordances,
};

/// In-memory game service with scripted replies and a call log
pub struct ScriptedService {
    pub session_active: Mutex<bool>,
    pub fight_message: String,
    pub move_delay: Duration,
    pub status: StatusReport,
    pub calls: Mutex<Vec<&'static str>>,
}

impl ScriptedService {
    pub fn new(session_active: bool) -> Self {
        Self {
            session_active: Mutex::new(session_active),
            fight_message: "Traveler attacks the Goblin for 12 damage! The Goblin has 13 HP left.".to_string(),
            move_delay: Duration::ZERO,
            status: StatusReport {
                health: Some(100),
                room: Some("Ancient Gate".to_string()),
                inventory: Some(Inventory::new()),
                enemies: Some(EnemyCount { remaining: 20, total: 20 }),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

impl GameService for ScriptedService {
    async fn query_session(&self) -> Result<bool, ServiceError> {
        self.record("get_game_state");
        Ok(*self.session_active.lock().expect("session lock"))
    }

    async fn notify_start(&self) -> Result<String, ServiceError> {
        self.record("start_game");
        *self.session_active.lock().expect("session lock") = true;
        Ok("Game started!".to_string())
    }

    async fn move_to(&self, direction: Direction) -> Result<String, ServiceError> {
        self.record("move");
        if !self.move_delay.is_zero() {
            tokio::time::sleep(self.move_delay).await;
        }
        Ok(format!("You walk {}. A narrow hallway with flickering torches.", direction))
    }

    async fn pickup(&self) -> Result<String, ServiceError> {
        self.record("pickup");
        Ok("Traveler picked up the Potion!".to_string())
    }

    async fn damage(&self, amount: u32) -> Result<String, ServiceError> {
        self.record("damage");
        Ok(format!("Traveler takes {} damage.", amount))
    }

    async fn fight(&self) -> Result<FightReply, ServiceError> {
        self.record("fight");
        Ok(FightReply {
            message: self.fight_message.clone(),
            outcome: None,
        })
    }

    async fn heal(&self) -> Result<String, ServiceError> {
        self.record("heal");
        Ok("Traveler has no potions!".to_string())
    }

    async fn query_status(&self) -> Result<StatusReport, ServiceError> {
        self.record("status");
        Ok(self.status.clone())
    }

    async fn restart(&self) -> Result<String, ServiceError> {
        self.record("restart");
        *self.session_active.lock().expect("session lock") = false;
        Ok("Traveler returns to the dungeon entrance. The evil has returned anew!".to_string())
    }

    async fn init_world(&self) -> Result<String, ServiceError> {
        self.record("init");
        Ok("Dungeon reset. Traveler awaits a new adventure!".to_string())
    }
}

/// Screen that the test can read while the event loop owns the renderer
#[derive(Clone, Default)]
pub struct SharedScreen(pub Arc<Mutex<Screen>>);

impl SharedScreen {
    pub fn snapshot(&self) -> Screen {
        self.0.lock().expect("screen lock").clone()
    }
}

impl Renderer for SharedScreen {
    fn timer(&mut self, text: &str, low_time: bool) {
        self.0.lock().expect("screen lock").timer(text, low_time);
    }

    fn output(&mut self, text: &str) {
        self.0.lock().expect("screen lock").output(text);
    }

    fn health(&mut self, text: &str) {
        self.0.lock().expect("screen lock").health(text);
    }

    fn room(&mut self, text: &str) {
        self.0.lock().expect("screen lock").room(text);
    }

    fn inventory(&mut self, text: &str) {
        self.0.lock().expect("screen lock").inventory(text);
    }

    fn enemies(&mut self, text: &str) {
        self.0.lock().expect("screen lock").enemies(text);
    }

    fn objective(&mut self, visible: bool) {
        self.0.lock().expect("screen lock").objective(visible);
    }

    fn controls(&mut self, affordances: &Affordances) {
        self.0.lock().expect("screen lock").controls(affordances);
    }
}
