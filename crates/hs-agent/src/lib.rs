//! `hs-agent`: settler records, professions, and the needs model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` (identity, profession, position, home/work handles) |
//! | [`needs`]       | `NeedKind`, `NeedDef`, `NeedsConfig`, `Needs` (decay + clamp) |
//! | [`profession`]  | `ProfessionKind`, `Profession`, `ProfessionTable`         |
//! | [`store`]       | `AgentStore` (creation-ordered), `AgentRngs` (per-agent RNG) |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and descriptor types. |

pub mod agent;
pub mod needs;
pub mod profession;
pub mod store;


pub use agent::Agent;
pub use needs::{NeedDef, NeedKind, Needs, NeedsConfig};
pub use profession::{Profession, ProfessionKind, ProfessionTable};
pub use store::{AgentRngs, AgentStore};
