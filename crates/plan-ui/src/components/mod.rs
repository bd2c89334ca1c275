pub mod card;
pub mod error_view;
pub mod icon;
pub mod loader;
pub mod nav;
pub mod online_activity_card;
pub mod players_card;
pub mod players_online_graph;
