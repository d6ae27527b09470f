use clap::Subcommand;
use foodorders::types::{OrderId, OrderInput};
use crate::state::State;

mod order;
mod report;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new order
    Create {
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Show all orders
    List {
        #[arg(long)]
        json: bool,
    },
    /// Replace every field of an existing order
    Update {
        id: OrderId,
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Remove an order
    Delete {
        id: OrderId,
    },
    /// Show order count, revenue and average order value
    Analyze {
        #[arg(long)]
        json: bool,
    },
    /// Chart the total quantity ordered per food item
    Visualize {
        /// Maximum bar length; defaults to the configured chart width
        #[arg(long)]
        width: Option<u16>,
        #[arg(long)]
        json: bool,
    },
}

/// Order fields as typed by the user; numbers are checked by the store.
#[derive(Debug, clap::Args)]
pub struct OrderArgs {
    pub customer_name: String,
    pub food_item: String,
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,
    #[arg(allow_hyphen_values = true)]
    pub price: String,
}

impl From<OrderArgs> for OrderInput {
    fn from(args: OrderArgs) -> OrderInput {
        OrderInput {
            customer_name: args.customer_name,
            food_item: args.food_item,
            quantity: args.quantity,
            price: args.price,
        }
    }
}

/// Run `command`, returning the text to print.
pub fn run(state: &mut State, command: Command) -> Result<String, String> {
    match command {
        Command::Create { order } => order::create(state, order.into()),
        Command::List { json } => order::list(state, json),
        Command::Update { id, order } =>
            order::update(state, id, order.into()),
        Command::Delete { id } => order::delete(state, id),
        Command::Analyze { json } => report::analyze(state, json),
        Command::Visualize { width, json } =>
            report::visualize(state, width, json),
    }
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| format!("error writing JSON: {e}"))
}
