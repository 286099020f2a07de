use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "MCTS Self Play Client")]
#[clap(about = "Plays board games against itself with Monte Carlo tree search", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hex on a rhombus board. Player 1 joins top and bottom, player 2 joins left and right.
    Hex(GameCommand),
    /// Nim with a single heap. Taking the last piece wins.
    Nim(GameCommand),
    /// Ledge. Picking up the gold coin wins.
    Ledge(GameCommand),
}

#[derive(Args)]
pub struct GameCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// Overrides num_games from the config.
    #[clap(short, long)]
    pub games: Option<usize>,

    /// Overrides visits from the config.
    #[clap(long)]
    pub visits: Option<usize>,

    /// Logs every move at info level.
    #[clap(short, long)]
    pub verbose: bool,
}
