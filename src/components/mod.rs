//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render ad listings and page chrome. They read the session from
//! Leptos context; every other input arrives as props.

pub mod ad_card;
pub mod ad_list;
pub mod ad_modify_dialog;
pub mod category_filter;
pub mod confirm_modal;
pub mod large_ad;
pub mod navigation_bar;
pub mod route_guard;
pub mod toast;
