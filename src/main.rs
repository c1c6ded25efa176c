use cart_store::core::ConfigProvider;
use cart_store::utils::{logger, validation::Validate};
use cart_store::{
    format_price, ApiClient, CartStore, CliConfig, Command, ConsoleNotifier, FileStorage,
    UpdateProductAmount,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let level = config.logging.level.as_deref();
    if config.logging.json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let api = ApiClient::from_config(&config)?;
    let storage = FileStorage::new(config.storage_path());
    let settings = config.settings();
    let locale = settings.locale;

    let mut store = match CartStore::open(api.clone(), api, storage, ConsoleNotifier, settings).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open cart: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // The notification has already been printed by the store.
    let outcome = match cli.command {
        Command::Show => Ok(()),
        Command::Add { product_id } => store.add_product(product_id).await,
        Command::Remove { product_id } => store.remove_product(product_id).await,
        Command::Update { product_id, amount } => {
            store
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    };

    let cart = store.cart();
    if cart.is_empty() {
        println!("🛒 Cart is empty");
    } else {
        println!("🛒 {} item(s)", cart.len());
        for item in cart {
            println!(
                "  #{:<4} {:<50} {:>3} x {:>12} = {:>12}",
                item.id,
                item.title,
                item.amount,
                format_price(item.price, locale),
                format_price(item.subtotal(), locale)
            );
        }
        println!("  Total: {}", format_price(cart.total(), locale));
    }

    if let Err(e) = outcome {
        std::process::exit(e.exit_code());
    }

    Ok(())
}
