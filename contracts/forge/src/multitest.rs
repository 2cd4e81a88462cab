use assert_matches::assert_matches;
use forge_token::ContractError as TokenError;

use crate::ContractError;

use self::suite::{Suite, SuiteBuilder};

mod suite;

#[test]
fn forge_is_registered_with_token() {
    let suite = SuiteBuilder::new().without_forge_registration().build();
    let config = suite.config().unwrap();
    assert_eq!(suite.token.as_str(), config.token);
    assert!(!config.authorized);

    let suite = Suite::new();
    assert!(suite.config().unwrap().authorized);
}

#[test]
fn unregistered_forge_cannot_burn() {
    let mut suite = SuiteBuilder::new().without_forge_registration().build();
    let user = suite.user("user");
    suite.mint_starters(&user, &[0, 1]).unwrap();

    let err = suite.forge(&user, 3).unwrap_err();
    assert_eq!(TokenError::CannotBurn {}.to_string(), err.root_cause().to_string());
    assert_eq!(1, suite.balance(&user, 0).unwrap());
    assert_eq!(1, suite.balance(&user, 1).unwrap());

    let (owner, forge) = (suite.owner.clone(), suite.forge.clone());
    suite.set_forge_address(&owner, &forge).unwrap();
    suite.forge(&user, 3).unwrap();
    assert_eq!(1, suite.balance(&user, 3).unwrap());
}

#[test]
fn only_owner_and_forge_mint() {
    let mut suite = Suite::new();
    let (owner, forge) = (suite.owner.clone(), suite.forge.clone());
    let user = suite.user("user");

    let err = suite.mint(&user, &user, 1, 100).unwrap_err();
    assert_eq!(TokenError::CannotMint {}.to_string(), err.root_cause().to_string());

    suite.mint(&owner, &user, 1, 100).unwrap();
    assert_eq!(100, suite.balance(&user, 1).unwrap());

    // any token id, no cooldown
    suite.mint(&forge, &user, 6, 1).unwrap();
    suite.mint(&forge, &user, 6, 1).unwrap();
    assert_eq!(2, suite.balance(&user, 6).unwrap());
    assert_eq!(2, suite.supply(6).unwrap());
}

#[test]
fn starter_mint_cooldown() {
    let mut suite = Suite::new();
    let user = suite.user("user");

    suite.mint_starter(&user, 0).unwrap();
    let err = suite.mint_starter(&user, 0).unwrap_err();
    assert_eq!(
        TokenError::CooldownActive {}.to_string(),
        err.root_cause().to_string()
    );

    // other starter tokens have their own timer
    suite.mint_starter(&user, 1).unwrap();

    suite.advance_seconds(59);
    suite.mint_starter(&user, 0).unwrap_err();

    suite.advance_seconds(1);
    suite.mint_starter(&user, 0).unwrap();
    assert_eq!(2, suite.balance(&user, 0).unwrap());

    let err = suite.mint_starter(&user, 3).unwrap_err();
    assert_eq!(
        TokenError::NotStarterToken { token_id: 3 }.to_string(),
        err.root_cause().to_string()
    );
}

#[test]
fn forge_address_burns_batches() {
    let mut suite = Suite::new();
    let (owner, forge) = (suite.owner.clone(), suite.forge.clone());
    let user = suite.user("user");
    suite.mint_starters(&user, &[0, 1, 2]).unwrap();

    let err = suite
        .burn_batch(&owner, &user, vec![0, 1, 2], vec![1, 1, 1])
        .unwrap_err();
    assert_eq!(TokenError::CannotBurn {}.to_string(), err.root_cause().to_string());

    let err = suite
        .burn_batch(&forge, &user, vec![0, 1, 2], vec![1, 1])
        .unwrap_err();
    assert_eq!(
        TokenError::LengthMismatch {
            token_ids: 3,
            amounts: 2
        }
        .to_string(),
        err.root_cause().to_string()
    );

    suite
        .burn_batch(&forge, &user, vec![0, 1, 2], vec![1, 1, 1])
        .unwrap();
    for token_id in 0..3 {
        assert_eq!(0, suite.balance(&user, token_id).unwrap());
        assert_eq!(0, suite.supply(token_id).unwrap());
    }
}

#[test]
fn forging_consumes_ingredients() {
    let mut suite = Suite::new();
    let user = suite.user("user");
    suite.mint_starters(&user, &[0, 1, 2]).unwrap();

    suite.forge(&user, 4).unwrap();
    assert_eq!(1, suite.balance(&user, 0).unwrap());
    assert_eq!(0, suite.balance(&user, 1).unwrap());
    assert_eq!(0, suite.balance(&user, 2).unwrap());
    assert_eq!(1, suite.balance(&user, 4).unwrap());
    assert_eq!(1, suite.supply(4).unwrap());
    assert_eq!(0, suite.supply(1).unwrap());
}

#[test]
fn forging_six_takes_all_starters() {
    let mut suite = Suite::new();
    let user = suite.user("user");
    suite.mint_starters(&user, &[0, 1, 2]).unwrap();

    suite.forge(&user, 6).unwrap();
    for token_id in 0..3 {
        assert_eq!(0, suite.balance(&user, token_id).unwrap());
    }
    assert_eq!(1, suite.balance(&user, 6).unwrap());
}

#[test]
fn forging_needs_every_ingredient() {
    let mut suite = Suite::new();
    let user = suite.user("user");
    suite.mint_starters(&user, &[0]).unwrap();

    let err = suite.forge(&user, 6).unwrap_err();
    assert_eq!(
        ContractError::MissingIngredients {
            token_id: 6,
            missing: vec![1, 2]
        },
        err.downcast::<ContractError>().unwrap()
    );
    assert_eq!(1, suite.balance(&user, 0).unwrap());

    let err = suite.forge(&user, 2).unwrap_err();
    assert_eq!(
        ContractError::NoRecipe { token_id: 2 },
        err.downcast::<ContractError>().unwrap()
    );
}

#[test]
fn trading_for_starters() {
    let mut suite = Suite::new();
    let user = suite.user("user");
    suite.mint_starters(&user, &[0]).unwrap();

    suite.trade(&user, 0, 2).unwrap();
    assert_eq!(0, suite.balance(&user, 0).unwrap());
    assert_eq!(1, suite.balance(&user, 2).unwrap());

    let err = suite.trade(&user, 2, 2).unwrap_err();
    assert_eq!(ContractError::SameToken { token_id: 2 }, err.downcast::<ContractError>().unwrap());

    let err = suite.trade(&user, 2, 5).unwrap_err();
    assert_eq!(
        ContractError::NotTradeable { token_id: 5 },
        err.downcast::<ContractError>().unwrap()
    );

    let err = suite.trade(&user, 0, 1).unwrap_err();
    assert_matches!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InsufficientBalance { token_id: 0, .. }
    );

    // forged tokens can be traded back down
    let forge = suite.forge.clone();
    suite.mint(&forge, &user, 5, 1).unwrap();
    suite.trade(&user, 5, 0).unwrap();
    assert_eq!(0, suite.balance(&user, 5).unwrap());
    assert_eq!(1, suite.balance(&user, 0).unwrap());
}

#[test]
fn burning_forged_tokens() {
    let mut suite = Suite::new();
    let user = suite.user("user");
    suite.mint_starters(&user, &[0, 2]).unwrap();
    suite.forge(&user, 5).unwrap();

    let err = suite.burn(&user, 5, 2).unwrap_err();
    assert_matches!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InsufficientBalance { token_id: 5, .. }
    );

    let err = suite.burn(&user, 5, 0).unwrap_err();
    assert_eq!(ContractError::ZeroAmount {}, err.downcast::<ContractError>().unwrap());

    suite.advance_seconds(60);
    suite.mint_starters(&user, &[0]).unwrap();
    let err = suite.burn(&user, 0, 1).unwrap_err();
    assert_eq!(
        ContractError::NotBurnable { token_id: 0 },
        err.downcast::<ContractError>().unwrap()
    );

    suite.burn(&user, 5, 1).unwrap();
    assert_eq!(0, suite.balance(&user, 5).unwrap());
    assert_eq!(0, suite.supply(5).unwrap());
    assert_eq!(1, suite.balance(&user, 0).unwrap());
}
