use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use token_swap::portfolio::{rank, WalletBalance};
use token_swap::prices::{HttpPriceFeed, PriceLoadState, PriceLoader};
use token_swap::swap::{PriceConverter, SwapForm, TokenSelector};
use token_swap::utils::{format_number, Config};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_target(true).with_env_filter(filter);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    info!("🚀 Loading prices from {}", config.price_feed_url);
    let loader = PriceLoader::new(Arc::new(HttpPriceFeed::from_config(&config)));
    loader.spawn().await?;

    if let PriceLoadState::Failed(reason) = loader.state().await {
        warn!("Continuing without prices: {}", reason);
    }
    let book = loader.book().await;

    // Token list as the selector would show it
    let mut selector = TokenSelector::new(config.default_from_token.clone());
    selector.set_disabled([config.default_to_token.clone()]);
    for option in selector.options(&book) {
        let marker = if option.disabled { " (disabled)" } else { "" };
        println!("{:<10} {:>12}{}", option.symbol, option.price_label, marker);
    }

    // Optional quote: token-swap <amount> [from] [to]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut form = SwapForm::from_config(&config);
    if let Some(from) = args.get(1) {
        form.set_from_token(from.to_uppercase());
    }
    if let Some(to) = args.get(2) {
        form.set_to_token(to.to_uppercase());
    }
    if let Some(amount) = args.first() {
        form.set_from_amount(amount, &book);
        match form.to_amount.as_str() {
            "" => println!("No quote for {} -> {}", form.from_token, form.to_token),
            quote => println!("{} {} = {} {}", form.from_amount, form.from_token, quote, form.to_token),
        }

        if form.can_execute() {
            let receipt = form.execute_swap(config.swap_delay()).await?;
            println!("{}", receipt.message);
        }
    }

    let converter = PriceConverter::new(book.clone());
    if let Some(rate) = converter.rate(&config.default_from_token, &config.default_to_token) {
        println!(
            "1 {} = {} {}",
            config.default_from_token,
            format_number(rate),
            config.default_to_token
        );
    }

    // Sample wallet valued with the same feed
    let balances = vec![
        WalletBalance::new("ATOM", "Osmosis", 12.0),
        WalletBalance::new("ETH", "Ethereum", 0.5),
        WalletBalance::new("USDC", "Arbitrum", 250.0),
        WalletBalance::new("ZIL", "Zilliqa", 0.0),
        WalletBalance::new("LUNA", "Terra", 40.0),
    ];
    for row in rank(&balances, &book.to_usd_map()) {
        println!(
            "{:<6} {:<10} {:>8} ${}",
            row.currency,
            row.blockchain,
            row.formatted_amount,
            format_number(row.usd_value)
        );
    }

    Ok(())
}
