//! Test fixtures for integration testing

use pitch_elo::types::{Player, Rating};

/// Roster of club players with realistic ratings
pub fn club_roster() -> Vec<Player> {
    vec![
        Player::new("1", "Santiago Ruiz", 1250),
        Player::new("2", "Mateo González", 1190),
        Player::new("3", "Lucas Fernández", 1310),
        Player::new("4", "Tomás Martínez", 1220),
        Player::new("5", "Joaquín López", 1280),
        Player::new("6", "Franco Silva", 1195),
        Player::new("7", "Valentín Romero", 1265),
        Player::new("8", "Agustín Torres", 1240),
        Player::new("9", "Nicolás Díaz", 1300),
        Player::new("10", "Bautista Morales", 1210),
        Player::new("11", "Lautaro Castro", 1290),
        Player::new("12", "Thiago Sánchez", 1230),
        Player::new("13", "Facundo Benítez", 1270),
        Player::new("14", "Maximiliano Vega", 1200),
        Player::new("15", "Rodrigo Herrera", 1320),
        Player::new("16", "Ezequiel Molina", 1245),
        Player::new("17", "Ignacio Pereyra", 1215),
        Player::new("18", "Benjamín Ríos", 1285),
        Player::new("19", "Emiliano Flores", 1225),
        Player::new("20", "Ian Medina", 1295),
        Player::new("21", "Dylan Ortiz", 1260),
        Player::new("22", "Kevin Navarro", 1340),
    ]
}

/// Look up a player's rating by id
pub fn rating_of(players: &[Player], id: &str) -> Option<Rating> {
    players.iter().find(|p| p.id == id).map(|p| p.rating)
}
