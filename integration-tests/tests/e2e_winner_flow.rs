//! End-to-End Test: Request -> Provider Fulfillment -> Consumer Callback
//!
//! This test demonstrates the full flow of:
//! 1. Authorizing a data provider on the oracle
//! 2. Pointing the consumer at the oracle
//! 3. The consumer requesting the fight winner
//! 4. The provider submitting the answer
//! 5. The consumer receiving the answer through its callback

use serde_json::json;

#[tokio::test]
async fn test_winner_request_fulfillment_flow() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = near_workspaces::sandbox().await?;

    // Build and deploy both contracts
    let oracle_wasm = near_workspaces::compile_project("../contracts/oracle").await?;
    let caller_wasm = near_workspaces::compile_project("../contracts/caller").await?;

    let oracle = sandbox.dev_deploy(&oracle_wasm).await?;
    let caller = sandbox.dev_deploy(&caller_wasm).await?;

    let admin = sandbox.dev_create_account().await?;
    let provider = sandbox.dev_create_account().await?;
    let owner = sandbox.dev_create_account().await?;

    // Initialize both contracts
    oracle
        .call("new")
        .args_json(json!({ "admin": admin.id() }))
        .transact()
        .await?
        .into_result()?;

    caller
        .call("new")
        .args_json(json!({ "owner": owner.id() }))
        .transact()
        .await?
        .into_result()?;

    // Admin authorizes the data provider
    admin
        .call(oracle.id(), "add_provider")
        .args_json(json!({ "provider": provider.id() }))
        .transact()
        .await?
        .into_result()?;

    // Owner points the consumer at the oracle
    owner
        .call(caller.id(), "set_oracle_address")
        .args_json(json!({ "oracle": oracle.id() }))
        .transact()
        .await?
        .into_result()?;

    // Consumer requests the fight winner; the oracle assigns ID 0
    let outcome = owner
        .call(caller.id(), "get_winner_fight")
        .max_gas()
        .transact()
        .await?;
    assert!(outcome.is_success(), "get_winner_fight failed");

    let request_id: String = outcome.clone().json()?;
    assert_eq!(request_id, "0");

    // Both contracts announced the request
    let request_events: Vec<&str> = outcome
        .logs()
        .iter()
        .filter(|log| log.contains("winner_fight_requested"))
        .copied()
        .collect();
    assert_eq!(
        request_events.len(),
        2,
        "expected the oracle event and the consumer propagation"
    );
    println!("✅ Request created with ID {}", request_id);

    // The oracle recorded the consumer as the requester
    let pending: serde_json::Value = oracle
        .view("get_pending_request")
        .args_json(json!({ "request_id": request_id }))
        .await?
        .json()?;
    assert_eq!(pending["requester"], caller.id().as_str());

    // A non-provider cannot fulfil the request
    let outcome = owner
        .call(oracle.id(), "return_winner_fight")
        .args_json(json!({
            "winner": "Pedro",
            "requester": caller.id(),
            "request_id": request_id
        }))
        .max_gas()
        .transact()
        .await?;
    assert!(outcome.is_failure(), "non-provider fulfillment must fail");

    // The authorized provider fulfils it
    let outcome = provider
        .call(oracle.id(), "return_winner_fight")
        .args_json(json!({
            "winner": "Pedro",
            "requester": caller.id(),
            "request_id": request_id
        }))
        .max_gas()
        .transact()
        .await?;
    assert!(outcome.is_success(), "provider fulfillment failed");

    let returned_events: Vec<&str> = outcome
        .logs()
        .iter()
        .filter(|log| log.contains("winner_fight_returned"))
        .copied()
        .collect();
    assert_eq!(returned_events.len(), 1);
    println!("✅ Fulfillment accepted and dispatched");

    // The consumer received the answer
    let winner: Option<String> = caller
        .view("get_winner")
        .args_json(json!({ "request_id": request_id }))
        .await?
        .json()?;
    assert_eq!(winner.as_deref(), Some("Pedro"));

    let last: serde_json::Value = caller.view("get_last_winner").await?.json()?;
    assert_eq!(last["winner"], "Pedro");
    assert_eq!(last["request_id"], "0");
    println!("✅ Consumer resolved winner: Pedro");

    // The request is gone; a second fulfillment attempt fails
    let pending: Option<serde_json::Value> = oracle
        .view("get_pending_request")
        .args_json(json!({ "request_id": request_id }))
        .await?
        .json()?;
    assert!(pending.is_none());

    let outcome = provider
        .call(oracle.id(), "return_winner_fight")
        .args_json(json!({
            "winner": "Maria",
            "requester": caller.id(),
            "request_id": request_id
        }))
        .max_gas()
        .transact()
        .await?;
    assert!(outcome.is_failure(), "double fulfillment must fail");

    // A fresh request gets the next ID, never reusing 0
    let outcome = owner
        .call(caller.id(), "get_winner_fight")
        .max_gas()
        .transact()
        .await?;
    let request_id: String = outcome.json()?;
    assert_eq!(request_id, "1");

    Ok(())
}
