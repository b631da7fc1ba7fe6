//! Golden end-to-end tests: real-world ABIs and calldata payloads decoded
//! through the public API, asserting the exact output values in both
//! formats.

use alloy_core::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};
use calldecode_core::{DecodeFormat, NestedValue, ParamValue};
use calldecode_evm::InputDataDecoder;

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Build `0x`-prefixed calldata for a function: selector + ABI-encoded args.
fn calldata(decoder: &InputDataDecoder, func: &str, args: Vec<DynSolValue>) -> String {
    let selector = decoder
        .selector_for(func)
        .unwrap_or_else(|| panic!("function '{func}' not in ABI"));
    let encoded = DynSolValue::Tuple(args).abi_encode();
    format!("0x{}{}", hex::encode(selector), hex::encode(encoded))
}

fn addr(s: &str) -> DynSolValue {
    DynSolValue::Address(s.parse::<Address>().unwrap())
}

fn uint(v: u128) -> DynSolValue {
    DynSolValue::Uint(U256::from(v), 256)
}

fn s(v: &str) -> NestedValue {
    NestedValue::String(v.into())
}

// ─── ERC-20 transfer ──────────────────────────────────────────────────────────

const ERC20_ABI: &str = r#"[
    {
        "name": "transfer",
        "type": "function",
        "inputs": [
            {"name": "_to", "type": "address"},
            {"name": "_value", "type": "uint256"}
        ],
        "outputs": [{"name": "", "type": "bool"}],
        "stateMutability": "nonpayable"
    }
]"#;

// transfer(0x5a1cb5..., 1 ether), selector a9059cbb, captured from mainnet
const TRANSFER_CALLDATA: &str = "0xa9059cbb0000000000000000000000005a1cb5a88988ca4fef229935db834a6781e873cb0000000000000000000000000000000000000000000000000de0b6b3a7640000";

#[test]
fn erc20_transfer_js_object_golden() {
    let decoder = InputDataDecoder::from_abi_json(ERC20_ABI, DecodeFormat::JsObject).unwrap();
    let call = decoder.decode_data(TRANSFER_CALLDATA).unwrap();

    assert_eq!(call.method_name, "transfer");
    let params = call.params.as_nested().unwrap();
    assert_eq!(params.len(), 2);
    // address is EIP-55 checksummed, amount is an exact decimal string
    assert_eq!(params["_to"], s("0x5A1Cb5A88988cA4FEF229935db834A6781e873cB"));
    assert_eq!(params["_value"], s("1000000000000000000"));
}

#[test]
fn erc20_transfer_solidity_type_golden() {
    let decoder = InputDataDecoder::from_abi_json(ERC20_ABI, DecodeFormat::SolidityType).unwrap();
    let call = decoder.decode_data(TRANSFER_CALLDATA).unwrap();

    let json = serde_json::to_value(&call).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "methodName": "transfer",
            "params": [
                {
                    "name": "_to",
                    "type": "address",
                    "value": "0x5A1Cb5A88988cA4FEF229935db834A6781e873cB"
                },
                {
                    "name": "_value",
                    "type": "uint256",
                    "value": "1000000000000000000"
                }
            ]
        })
    );
}

#[test]
fn decode_output_is_deterministic() {
    let decoder = InputDataDecoder::from_abi_json(ERC20_ABI, DecodeFormat::JsObject).unwrap();
    let first = serde_json::to_string(&decoder.decode_data(TRANSFER_CALLDATA).unwrap()).unwrap();
    for _ in 0..8 {
        let again =
            serde_json::to_string(&decoder.decode_data(TRANSFER_CALLDATA).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

// ─── Failure sentinel ─────────────────────────────────────────────────────────

#[test]
fn garbage_and_partial_calldata_return_none() {
    let decoder = InputDataDecoder::from_abi_json(ERC20_ABI, DecodeFormat::JsObject).unwrap();

    // non-hex body
    assert!(decoder.decode_data("0xbitconnect").is_none());
    // selector of a function not in this ABI
    assert!(decoder
        .decode_data("0x095ea7b30000000000000000000000005a1cb5a88988ca4fef229935db834a6781e873cb0000000000000000000000000000000000000000000000000de0b6b3a7640000")
        .is_none());
    // known selector, truncated argument block
    assert!(decoder.decode_data("0xa9059cbb0000ff").is_none());
    // shorter than a selector
    assert!(decoder.decode_data("0xa905").is_none());
}

// ─── Unnamed parameters / bytes32[] ───────────────────────────────────────────

const MULTI_HASH_ABI: &str = r#"[
    {
        "name": "submitHashes",
        "type": "function",
        "inputs": [{"name": "", "type": "bytes32[]"}],
        "outputs": [],
        "stateMutability": "nonpayable"
    }
]"#;

#[test]
fn bytes32_array_passes_through_as_hex_under_empty_key() {
    let decoder = InputDataDecoder::from_abi_json(MULTI_HASH_ABI, DecodeFormat::JsObject).unwrap();
    let hash = [0xabu8; 32];
    let data = calldata(
        &decoder,
        "submitHashes",
        vec![DynSolValue::Array(vec![DynSolValue::FixedBytes(
            hash.into(),
            32,
        )])],
    );

    let call = decoder.decode_data(&data).unwrap();
    let params = call.params.as_nested().unwrap();
    assert_eq!(
        params[""],
        NestedValue::Array(vec![s(&format!("0x{}", hex::encode(hash)))])
    );
}

// ─── Uniswap-style address[] path ─────────────────────────────────────────────

const ROUTER_ABI: &str = r#"[
    {
        "name": "swapExactETHForTokens",
        "type": "function",
        "inputs": [
            {"name": "amountOutMin", "type": "uint256"},
            {"name": "path", "type": "address[]"},
            {"name": "to", "type": "address"},
            {"name": "deadline", "type": "uint256"}
        ],
        "outputs": [{"name": "amounts", "type": "uint256[]"}],
        "stateMutability": "payable"
    }
]"#;

#[test]
fn address_array_elements_are_checksummed() {
    let weth = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    let dai = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    let decoder = InputDataDecoder::from_abi_json(ROUTER_ABI, DecodeFormat::JsObject).unwrap();
    let data = calldata(
        &decoder,
        "swapExactETHForTokens",
        vec![
            uint(990_000_000_000_000_000),
            DynSolValue::Array(vec![addr(weth), addr(dai)]),
            addr("0x5A1Cb5A88988cA4FEF229935db834A6781e873cB"),
            uint(1_700_000_000),
        ],
    );

    let call = decoder.decode_data(&data).unwrap();
    let params = call.params.as_nested().unwrap();
    assert_eq!(params["path"], NestedValue::Array(vec![s(weth), s(dai)]));
    assert_eq!(params["amountOutMin"], s("990000000000000000"));
    assert_eq!(params["deadline"], s("1700000000"));
}

// ─── Tuple arrays ─────────────────────────────────────────────────────────────

const SETTLEMENT_ABI: &str = r#"[
    {
        "name": "settle",
        "type": "function",
        "inputs": [
            {
                "name": "orders",
                "type": "tuple[]",
                "components": [
                    {"name": "maker", "type": "address"},
                    {"name": "taker", "type": "address"},
                    {"name": "amount", "type": "uint256"}
                ]
            }
        ],
        "outputs": [],
        "stateMutability": "nonpayable"
    }
]"#;

#[test]
fn tuple_array_becomes_sequence_of_named_maps() {
    let maker = "0x5A1Cb5A88988cA4FEF229935db834A6781e873cB";
    let taker = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    let decoder = InputDataDecoder::from_abi_json(SETTLEMENT_ABI, DecodeFormat::JsObject).unwrap();
    let order = |amount: u128| DynSolValue::Tuple(vec![addr(maker), addr(taker), uint(amount)]);
    let data = calldata(
        &decoder,
        "settle",
        vec![DynSolValue::Array(vec![order(100), order(250)])],
    );

    let call = decoder.decode_data(&data).unwrap();
    let params = call.params.as_nested().unwrap();
    let NestedValue::Array(orders) = &params["orders"] else {
        panic!("expected array of orders");
    };
    assert_eq!(orders.len(), 2);
    let NestedValue::Object(first) = &orders[0] else {
        panic!("expected name-keyed map per order");
    };
    assert_eq!(first["maker"], s(maker));
    assert_eq!(first["taker"], s(taker));
    assert_eq!(first["amount"], s("100"));
    let NestedValue::Object(second) = &orders[1] else {
        panic!("expected name-keyed map per order");
    };
    assert_eq!(second["amount"], s("250"));
}

#[test]
fn tuple_array_flat_format_keeps_type_annotations() {
    let maker = "0x5A1Cb5A88988cA4FEF229935db834A6781e873cB";
    let taker = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    let decoder =
        InputDataDecoder::from_abi_json(SETTLEMENT_ABI, DecodeFormat::SolidityType).unwrap();
    let data = calldata(
        &decoder,
        "settle",
        vec![DynSolValue::Array(vec![DynSolValue::Tuple(vec![
            addr(maker),
            addr(taker),
            uint(100),
        ])])],
    );

    let call = decoder.decode_data(&data).unwrap();
    let params = call.params.as_flat().unwrap();
    assert_eq!(params[0].name, "orders");
    assert_eq!(params[0].solidity_type, "tuple[]");
    let ParamValue::Array(items) = &params[0].value else {
        panic!("expected array");
    };
    let ParamValue::Tuple(fields) = &items[0] else {
        panic!("expected tuple element");
    };
    assert_eq!(fields[0].name, "maker");
    assert_eq!(fields[0].solidity_type, "address");
    assert_eq!(fields[2].value, ParamValue::String("100".into()));
}

// ─── Two-dimensional tuple arrays (Balancer-style batch swaps) ────────────────

const BATCH_SWAP_ABI: &str = r#"[
    {
        "name": "batchSwap",
        "type": "function",
        "inputs": [
            {
                "name": "swapSequences",
                "type": "tuple[][]",
                "components": [
                    {"name": "pool", "type": "address"},
                    {"name": "swapAmount", "type": "uint256"}
                ]
            },
            {"name": "totalAmountIn", "type": "uint256"}
        ],
        "outputs": [],
        "stateMutability": "payable"
    }
]"#;

#[test]
fn nested_tuple_array_preserves_both_dimensions() {
    let pool_a = "0xC16BbBe540e6595967035F3a505477E26a38C0c5";
    let pool_b = "0x5A1Cb5A88988cA4FEF229935db834A6781e873cB";

    let decoder = InputDataDecoder::from_abi_json(BATCH_SWAP_ABI, DecodeFormat::JsObject).unwrap();
    let swap = |pool: &str, amount: u128| DynSolValue::Tuple(vec![addr(pool), uint(amount)]);
    let data = calldata(
        &decoder,
        "batchSwap",
        vec![
            DynSolValue::Array(vec![
                DynSolValue::Array(vec![swap(pool_a, 10)]),
                DynSolValue::Array(vec![swap(pool_a, 20), swap(pool_b, 30)]),
            ]),
            uint(60),
        ],
    );

    let call = decoder.decode_data(&data).unwrap();
    let params = call.params.as_nested().unwrap();
    assert_eq!(params["totalAmountIn"], s("60"));

    let NestedValue::Array(sequences) = &params["swapSequences"] else {
        panic!("expected outer array");
    };
    assert_eq!(sequences.len(), 2);
    let NestedValue::Array(second) = &sequences[1] else {
        panic!("expected inner array");
    };
    assert_eq!(second.len(), 2);
    let NestedValue::Object(last) = &second[1] else {
        panic!("expected map per swap");
    };
    assert_eq!(last["pool"], s(pool_b));
    assert_eq!(last["swapAmount"], s("30"));
}

// ─── Format consistency ───────────────────────────────────────────────────────

#[test]
fn nested_output_equals_collapsed_flat_output() {
    let decoder =
        InputDataDecoder::from_abi_json(SETTLEMENT_ABI, DecodeFormat::SolidityType).unwrap();
    let data = calldata(
        &decoder,
        "settle",
        vec![DynSolValue::Array(vec![DynSolValue::Tuple(vec![
            addr("0x5A1Cb5A88988cA4FEF229935db834A6781e873cB"),
            addr("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            uint(42),
        ])])],
    );

    let flat = decoder.decode_data(&data).unwrap();
    let nested = decoder
        .decode_data_as(&data, DecodeFormat::JsObject)
        .unwrap();

    let collapsed = calldecode_core::types::collapse_params(flat.params.as_flat().unwrap());
    assert_eq!(nested.params.as_nested().unwrap(), &collapsed);
}
