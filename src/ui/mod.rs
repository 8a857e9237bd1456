//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: ファイルダイアログ（メインスレッドで実行する必要がある処理）
//! - `rayon::spawn`: サムネイルのデコード（別スレッドで実行可能な重い処理）
//! - `slint::invoke_from_event_loop`: ワーカーやドロップイベントからUIスレッドへ戻る時に使用

pub mod handlers;
pub mod presentation;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
