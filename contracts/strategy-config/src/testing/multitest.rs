use crate::contract::{execute, instantiate, query};
use crate::msg::{FeesResponse, InstantiateMsg, QueryMsg};
use cosmwasm_std::Addr;
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, ContractWrapper, Executor};

fn store_and_instantiate(app: &mut App, msg: &InstantiateMsg) -> AnyResult<Addr> {
    let code_id = app.store_code(Box::new(ContractWrapper::new(execute, instantiate, query)));
    let creator = app.api().addr_make("creator");
    app.instantiate_contract(code_id, creator, msg, &[], "strategy-config", None)
}

#[test]
fn test_end_to_end_default_deployment() {
    let mut app = App::default();
    let contract = store_and_instantiate(&mut app, &InstantiateMsg::default()).unwrap();

    let fees: Vec<u64> = app
        .wrap()
        .query_wasm_smart(
            contract.clone(),
            &QueryMsg::Get {
                field: "FeeSet".to_string(),
            },
        )
        .unwrap();
    assert_eq!(fees, vec![1000, 1000, 50]);

    let multisig: String = app
        .wrap()
        .query_wasm_smart(
            contract.clone(),
            &QueryMsg::Get {
                field: "BADGER_DEV_MULTISIG".to_string(),
            },
        )
        .unwrap();
    assert_eq!(multisig, "0xc388750A661cC0B99784bAB2c55e1F38ff91643b");

    let want: String = app
        .wrap()
        .query_wasm_smart(
            contract.clone(),
            &QueryMsg::Get {
                field: "WantTokenAddress".to_string(),
            },
        )
        .unwrap();
    assert_eq!(want, "0x1bfd67037b42cf73acf2047067bd4f2c47d9bfd6");

    let response: FeesResponse = app
        .wrap()
        .query_wasm_smart(contract, &QueryMsg::GetFees {})
        .unwrap();
    assert_eq!(response.withdrawal_fee, 50);
}

#[test]
fn test_end_to_end_unknown_field() {
    let mut app = App::default();
    let contract = store_and_instantiate(&mut app, &InstantiateMsg::default()).unwrap();

    let result = app.wrap().query_wasm_smart::<Vec<u64>>(
        contract,
        &QueryMsg::Get {
            field: "TREASURY".to_string(),
        },
    );
    assert!(result.is_err());
}

#[test]
fn test_end_to_end_invalid_config_is_rejected() {
    let mut app = App::default();
    let msg = InstantiateMsg {
        reward_token: "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf12zz".to_string(),
        ..InstantiateMsg::default()
    };

    let err = store_and_instantiate(&mut app, &msg).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("invalid address for reward_token"));

    let msg = InstantiateMsg {
        withdrawal_fee: 10_001,
        ..InstantiateMsg::default()
    };

    let err = store_and_instantiate(&mut app, &msg).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("fee withdrawal_fee is 10001 bps"));
}
