pub mod buffer;
pub mod collapsible;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod measure;
pub mod query;
pub mod render;
pub mod stylesheet;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use collapsible::{Collapsible, CollapsibleOptions, Viewport};
pub use element::{find, find_mut, Content, Element};
pub use event::{translate_events, Event, Key, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use query::{matching_ancestor, select_all, select_children, Selector, SelectorError};
pub use render::render_to_buffer;
pub use stylesheet::{Rule, Stylesheet};
pub use terminal::Terminal;
pub use types::*;
