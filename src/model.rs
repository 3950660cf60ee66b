use eframe::egui;
use serde::{Deserialize, Serialize};

/// Width of the drawing surface in surface units.
pub const FIELD_WIDTH: f32 = 800.0;
/// Height of the drawing surface in surface units.
pub const FIELD_HEIGHT: f32 = 900.0;

pub type PlayerId = u64;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Football,
    Basketball,
    Soccer,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Football, Sport::Basketball, Sport::Soccer];

    pub fn label(self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
            Sport::Soccer => "Soccer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Team {
    Offense,
    Defense,
}

impl Team {
    pub fn label(self) -> &'static str {
        match self {
            Team::Offense => "Offense",
            Team::Defense => "Defense",
        }
    }

    /// Marker text for a freshly added player.
    pub fn default_marker(self) -> &'static str {
        match self {
            Team::Offense => "O",
            Team::Defense => "D",
        }
    }

    /// Offense starts in the lower half of the field, defense in the upper.
    pub fn default_position(self) -> egui::Pos2 {
        match self {
            Team::Offense => egui::pos2(400.0, 500.0),
            Team::Defense => egui::pos2(400.0, 200.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub pos: egui::Pos2,
    pub label: String,
    pub team: Team,
}

/// Ordered waypoints for one player. The last point is the arrow tip.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub player_id: PlayerId,
    pub points: Vec<egui::Pos2>,
}

impl Route {
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// The player and route collections of one editing session.
///
/// Both collections keep insertion order; rendering and hit testing rely on
/// it. Every route references an existing player: removing a player drops
/// its route, and routes for unknown players are rejected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Play {
    pub players: Vec<Player>,
    pub routes: Vec<Route>,
    next_id: PlayerId,
}

impl Play {
    fn allocate_id(&mut self) -> PlayerId {
        self.next_id += 1;
        self.next_id
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    pub fn route_for(&self, player_id: PlayerId) -> Option<&Route> {
        self.routes.iter().find(|r| r.player_id == player_id)
    }

    pub fn add_player(&mut self, team: Team) -> PlayerId {
        let id = self.allocate_id();
        self.players.push(Player {
            id,
            pos: team.default_position(),
            label: team.default_marker().to_string(),
            team,
        });
        id
    }

    /// Returns false when no player has `id`.
    pub fn move_player(&mut self, id: PlayerId, pos: egui::Pos2) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Removes the player together with the route it owns.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() == before {
            return false;
        }
        self.routes.retain(|r| r.player_id != id);
        true
    }

    /// Inserts the route, or replaces the existing route of the same player
    /// in place. Routes for unknown players are dropped.
    pub fn upsert_route(&mut self, route: Route) -> bool {
        if !self.contains_player(route.player_id) {
            return false;
        }
        match self
            .routes
            .iter_mut()
            .find(|r| r.player_id == route.player_id)
        {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
        true
    }

    pub fn clear(&mut self) {
        self.players.clear();
        self.routes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(player_id: PlayerId, points: &[(f32, f32)]) -> Route {
        Route {
            player_id,
            points: points.iter().map(|&(x, y)| egui::pos2(x, y)).collect(),
        }
    }

    #[test]
    fn add_player_uses_team_defaults() {
        let mut play = Play::default();
        let o = play.add_player(Team::Offense);
        let d = play.add_player(Team::Defense);
        assert_ne!(o, d);

        let offense = play.player(o).unwrap();
        assert_eq!(offense.pos, egui::pos2(400.0, 500.0));
        assert_eq!(offense.label, "O");
        let defense = play.player(d).unwrap();
        assert_eq!(defense.pos, egui::pos2(400.0, 200.0));
        assert_eq!(defense.label, "D");
    }

    #[test]
    fn ids_stay_unique_after_clear() {
        let mut play = Play::default();
        let first = play.add_player(Team::Offense);
        play.clear();
        let second = play.add_player(Team::Offense);
        assert_ne!(first, second);
    }

    #[test]
    fn move_player_only_touches_target() {
        let mut play = Play::default();
        let a = play.add_player(Team::Offense);
        let b = play.add_player(Team::Defense);
        assert!(play.move_player(a, egui::pos2(300.0, 300.0)));
        assert_eq!(play.player(a).unwrap().pos, egui::pos2(300.0, 300.0));
        assert_eq!(play.player(b).unwrap().pos, egui::pos2(400.0, 200.0));
        assert!(!play.move_player(999, egui::pos2(1.0, 1.0)));
    }

    #[test]
    fn upsert_replaces_without_merging() {
        let mut play = Play::default();
        let a = play.add_player(Team::Offense);
        assert!(play.upsert_route(route(a, &[(1.0, 1.0), (2.0, 2.0)])));
        assert!(play.upsert_route(route(a, &[(5.0, 5.0)])));
        assert_eq!(play.routes.len(), 1);
        assert_eq!(play.route_for(a).unwrap().points, vec![egui::pos2(5.0, 5.0)]);
    }

    #[test]
    fn upsert_keeps_route_order() {
        let mut play = Play::default();
        let a = play.add_player(Team::Offense);
        let b = play.add_player(Team::Defense);
        play.upsert_route(route(a, &[(1.0, 1.0), (2.0, 2.0)]));
        play.upsert_route(route(b, &[(3.0, 3.0), (4.0, 4.0)]));
        play.upsert_route(route(a, &[(9.0, 9.0), (8.0, 8.0)]));
        let owners: Vec<_> = play.routes.iter().map(|r| r.player_id).collect();
        assert_eq!(owners, vec![a, b]);
    }

    #[test]
    fn upsert_rejects_unknown_player() {
        let mut play = Play::default();
        assert!(!play.upsert_route(route(42, &[(1.0, 1.0), (2.0, 2.0)])));
        assert!(play.routes.is_empty());
    }

    #[test]
    fn remove_player_cascades_to_own_route_only() {
        let mut play = Play::default();
        let a = play.add_player(Team::Offense);
        let b = play.add_player(Team::Defense);
        play.upsert_route(route(a, &[(1.0, 1.0), (2.0, 2.0)]));
        play.upsert_route(route(b, &[(3.0, 3.0), (4.0, 4.0)]));

        assert!(play.remove_player(a));
        assert!(play.player(a).is_none());
        assert!(play.route_for(a).is_none());
        assert!(play.route_for(b).is_some());
        assert!(!play.remove_player(a));
    }
}
