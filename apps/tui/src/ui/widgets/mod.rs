pub mod cards;
pub mod nav;
pub mod pie;
pub mod popup;
