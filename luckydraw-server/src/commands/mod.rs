pub mod draw;
pub mod serve;
pub mod wallet;

pub use draw::{handle_draw_command, DrawCommands};
pub use serve::serve;
pub use wallet::{handle_wallet_command, WalletCommands};
