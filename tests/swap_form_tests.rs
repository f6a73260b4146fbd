use std::time::Duration;
use token_swap::prices::PriceBook;
use token_swap::swap::SwapForm;
use token_swap::SwapError;

fn book() -> PriceBook {
    [("ATOM", 10.0), ("USDC", 1.0), ("ETH", 2000.0)].into_iter().collect()
}

#[test]
fn test_default_form() {
    let form = SwapForm::default();
    assert_eq!(form.from_token, "ATOM");
    assert_eq!(form.to_token, "USDC");
    assert!(form.from_amount.is_empty());
    assert!(!form.can_execute());
}

#[test]
fn test_typing_updates_other_side() {
    let prices = book();
    let mut form = SwapForm::default();

    form.set_from_amount("1,5a0", &prices);
    assert_eq!(form.from_amount, "150");
    assert_eq!(form.to_amount, "1,500.00");

    form.set_to_amount("25", &prices);
    assert_eq!(form.to_amount, "25");
    assert_eq!(form.from_amount, "2.50");

    form.set_from_amount("", &prices);
    assert_eq!(form.to_amount, "");
}

#[test]
fn test_unknown_token_gives_empty_quote() {
    let mut form = SwapForm::new("ATOM", "DOGE");
    form.set_from_amount("3", &book());
    assert_eq!(form.from_amount, "3");
    assert_eq!(form.to_amount, "");
    assert!(!form.can_execute());
}

#[test]
fn test_swap_tokens_is_involution() {
    let mut form = SwapForm::default();
    form.set_from_amount("2", &book());
    let original = form.clone();

    form.swap_tokens();
    assert_eq!(form.from_token, "USDC");
    assert_eq!(form.to_token, "ATOM");
    assert_eq!(form.from_amount, "20.00");
    assert_eq!(form.to_amount, "2");

    form.swap_tokens();
    assert_eq!(form, original);
}

#[test]
fn test_begin_swap_rejects_second_execution() {
    let mut form = SwapForm::default();
    form.set_from_amount("1", &book());

    let pending = form.begin_swap().unwrap();
    assert!(form.swapping);
    assert!(!form.can_execute());
    assert!(matches!(form.begin_swap(), Err(SwapError::SwapInFlight)));

    let receipt = form.complete_swap(pending);
    assert_eq!(receipt.message, "Swap successful: 1.00 ATOM → 10.00 USDC");
    assert!(!form.swapping);
    assert!(form.from_amount.is_empty());
    assert!(form.to_amount.is_empty());
}

#[test]
fn test_begin_swap_requires_amounts() {
    let mut form = SwapForm::default();
    assert!(matches!(form.begin_swap(), Err(SwapError::Validation(_))));
    assert!(!form.swapping);
}

#[tokio::test(start_paused = true)]
async fn test_execute_swap_waits_then_resets() {
    let mut form = SwapForm::default();
    form.set_from_amount("1000", &book());

    let started = tokio::time::Instant::now();
    let receipt = form.execute_swap(Duration::from_secs(1)).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(receipt.from_amount, 1000.0);
    assert_eq!(receipt.to_amount, 10000.0);
    assert_eq!(receipt.message, "Swap successful: 1,000.00 ATOM → 10,000.00 USDC");
    assert!(!form.swapping);
    assert!(form.from_amount.is_empty());
}
