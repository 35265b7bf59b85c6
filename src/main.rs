use taskboard::commands::Cli;
use taskboard::libs::messages::Message;
use taskboard::msg_error;

#[tokio::main]
async fn main() {
    if let Err(err) = Cli::menu().await {
        msg_error!(Message::FatalError(err.to_string()));
        std::process::exit(1);
    }
}
