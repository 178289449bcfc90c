//! Enemy decision making.
//!
//! - [`nodes`]: leaves wired to [`crate::enemy::Agent`] capabilities
//! - [`presets`]: complete trees assembled from those leaves
pub mod nodes;
pub mod presets;

use behavior_tree::Node;

use crate::enemy::Agent;

/// Boxed behavior tree ticked against an enemy's [`Agent`].
pub type EnemyAi = Node<Agent>;
