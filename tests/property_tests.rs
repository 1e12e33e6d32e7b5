use loan_advisor::application::calculator::LoanCalculator;
use loan_advisor::domain::money::Money;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod common;

const SAMPLES: usize = 2_000;

#[test]
fn test_valid_inputs_give_rounded_finite_quotes() {
    let mut rng = StdRng::seed_from_u64(0x10a5);
    let calculator = LoanCalculator::new();

    for _ in 0..SAMPLES {
        let request = common::random_valid_request(&mut rng);
        let quote = calculator.quote(&request).unwrap();

        for money in [
            quote.recommended_loan_amount,
            quote.principal,
            quote.total_interest_rate,
            quote.monthly_repayment,
        ] {
            assert!(money.as_decimal().unwrap().scale() <= 2, "{request:?} -> {money}");
        }
        assert!(quote.recommended_loan_amount.as_decimal().unwrap() > Decimal::ZERO);
    }
}

#[test]
fn test_monthly_repayment_is_rounded_loan_amount_over_tenor() {
    let mut rng = StdRng::seed_from_u64(0x7e40);
    let calculator = LoanCalculator::new();

    for _ in 0..SAMPLES {
        let request = common::random_valid_request(&mut rng);
        let quote = calculator.quote(&request).unwrap();

        let months = request.loan_tenor as f64;
        let cumulative_interest = request.monthly_interest * months / 100.0;
        let loan_amount = 0.3
            * request.salary
            * ((1.0 - (1.0 + cumulative_interest).powf(-months)) / cumulative_interest);
        let expected = Money::from_f64(loan_amount / months, "monthly_repayment").unwrap();
        assert_eq!(quote.monthly_repayment, expected, "{request:?}");

        // Rounding both sides costs at most half a cent each
        let tenor = Decimal::from(request.loan_tenor);
        let drift = (quote.monthly_repayment.as_decimal().unwrap()
            - quote.recommended_loan_amount.as_decimal().unwrap() / tenor)
            .abs();
        assert!(drift <= dec!(0.005) + dec!(0.005) / tenor, "{request:?}");
    }
}

#[test]
fn test_quotes_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(0xd37e);
    let calculator = LoanCalculator::new();

    for _ in 0..200 {
        let request = common::random_valid_request(&mut rng);
        let first = calculator.quote(&request).unwrap();
        let second = LoanCalculator::new().quote(&request).unwrap();
        assert_eq!(first, second);
    }
}
