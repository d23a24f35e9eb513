use clap::{Args, Parser, Subcommand};
use solitaire::cipher::Direction;
use solitaire::cli::{
    check_vector, decode_code, encode_deck, run_cipher, show_fingerprint, show_keystream,
    show_sanitized, shuffle_deck, CipherCommandOptions, DeckSource,
};
use solitaire::fingerprint::HashAlgorithm;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SOLITAIRE_VERSION");
const PROFILE: &str = env!("SOLITAIRE_PROFILE");
const GIT_HASH: &str = env!("SOLITAIRE_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "solitaire")]
#[command(author, about = "Solitaire deck-of-cards stream cipher", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Starting deck; the ordered deck when none is given
#[derive(Args, Clone, Default)]
struct DeckArgs {
    /// Deck vector, e.g. "1, 2, ..., 52, A, B"
    #[arg(long, group = "deck_source")]
    deck: Option<String>,

    /// Deck code
    #[arg(long, group = "deck_source")]
    code: Option<String>,

    /// File containing a deck vector
    #[arg(long, group = "deck_source")]
    deck_file: Option<PathBuf>,
}

impl From<DeckArgs> for DeckSource {
    fn from(args: DeckArgs) -> Self {
        DeckSource {
            vector: args.deck,
            code: args.code,
            file: args.deck_file,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with the deck's keystream
    #[command(alias = "e")]
    Encrypt {
        /// Text in the cipher alphabet (A-Z, 0-9, space and . , ' - ? ! : ; " ( ) / _ @ &)
        text: String,

        #[command(flatten)]
        deck: DeckArgs,

        /// Acknowledge that this deck already produced keystream for another message
        #[arg(long)]
        continued: bool,

        /// Normalize the text into the cipher alphabet first
        #[arg(long)]
        sanitize: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decrypt text with the deck's keystream
    #[command(alias = "d")]
    Decrypt {
        /// Ciphertext in the cipher alphabet
        text: String,

        #[command(flatten)]
        deck: DeckArgs,

        #[arg(long)]
        continued: bool,

        #[arg(long)]
        sanitize: bool,

        #[arg(long)]
        json: bool,
    },

    /// Print raw keystream values
    #[command(alias = "k")]
    Keystream {
        /// Number of values
        length: usize,

        #[command(flatten)]
        deck: DeckArgs,

        #[arg(long)]
        json: bool,
    },

    /// Shuffle a new deck
    Shuffle {
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the deck code of a deck
    #[command(alias = "c")]
    Encode {
        #[command(flatten)]
        deck: DeckArgs,
    },

    /// Print the deck vector named by a deck code
    Decode {
        code: String,
    },

    /// Print a deck fingerprint
    #[command(alias = "f")]
    Fingerprint {
        #[command(flatten)]
        deck: DeckArgs,

        /// Hash algorithm
        #[arg(long, default_value = "sha256", value_parser = parse_hash)]
        hash: HashAlgorithm,
    },

    /// Check a deck vector
    Validate {
        vector: String,
    },

    /// Normalize free text into the cipher alphabet
    #[command(alias = "s")]
    Sanitize {
        text: String,

        /// List every change as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_hash(s: &str) -> Result<HashAlgorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn cipher_options(
    deck: DeckArgs,
    continued: bool,
    sanitize: bool,
    json: bool,
) -> CipherCommandOptions {
    CipherCommandOptions {
        deck: deck.into(),
        continued,
        sanitize,
        json,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.version {
        println!("solitaire {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            text,
            deck,
            continued,
            sanitize,
            json,
        } => run_cipher(
            Direction::Encrypt,
            &text,
            &cipher_options(deck, continued, sanitize, json),
        ),

        Commands::Decrypt {
            text,
            deck,
            continued,
            sanitize,
            json,
        } => run_cipher(
            Direction::Decrypt,
            &text,
            &cipher_options(deck, continued, sanitize, json),
        ),

        Commands::Keystream { length, deck, json } => show_keystream(length, &deck.into(), json),

        Commands::Shuffle { seed } => Ok(shuffle_deck(seed)),

        Commands::Encode { deck } => encode_deck(&deck.into()),

        Commands::Decode { code } => decode_code(&code),

        Commands::Fingerprint { deck, hash } => show_fingerprint(&deck.into(), hash),

        Commands::Validate { vector } => check_vector(&vector),

        Commands::Sanitize { text, json } => show_sanitized(&text, json),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
