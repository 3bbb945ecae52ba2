//! Literal example sources, keyed by file label.

pub(super) const HELLO: &str = r##"fn main() {
    println!("Hello World! Rust works!");
}"##;

pub(super) const VARIABLE: &str = r##"fn main() {
    let x = 5u32;
    let y = true;
    let z = String::from("Hello world!");
    println!("The value of x: {:?}", x);
    println!("The value of y: {:?}", y);
    println!("The value of z: {:?}", z);
}"##;

pub(super) const FUNCTIONS: &str = r##"fn add(a: u32, b: u32) -> u32 {
    a + b
}

fn describe(value: u32) -> String {
    if value % 2 == 0 {
        format!("{} is even", value)
    } else {
        format!("{} is odd", value)
    }
}

fn main() {
    let sum = add(20, 22);
    println!("add(20, 22) = {}", sum);
    println!("{}", describe(sum));
}"##;

pub(super) const STYLUS_VARIABLES: &str = r##"#![cfg_attr(not(any(feature = "export-abi", test)), no_main)]
extern crate alloc;

use stylus_sdk::alloy_primitives::{U16, U256};
use stylus_sdk::prelude::*;
use stylus_sdk::storage::{StorageAddress, StorageBool, StorageU256};
use stylus_sdk::{block, console, msg};

#[storage]
#[entrypoint]
pub struct Contract {
    initialized: StorageBool,
    owner: StorageAddress,
    max_supply: StorageU256,
}

#[public]
impl Contract {
    pub fn show_variables() -> ArbResult {
        let local_number = 42u32;
        let local_text = String::from("Local variable");

        let timestamp = block::timestamp();
        let sender = msg::sender();

        console!("Local variables: {}, {}", local_number, local_text);
        console!("Global variables: {}, {}", timestamp, sender);
        Ok(Vec::new())
    }
}"##;

pub(super) const STYLUS_CONSTANTS: &str = r##"#![cfg_attr(not(any(feature = "export-abi", test)), no_main)]
extern crate alloc;

use stylus_sdk::alloy_primitives::Address;
use stylus_sdk::prelude::*;
use stylus_sdk::storage::StorageAddress;
use stylus_sdk::console;

const OWNER: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
const MAX_SUPPLY: u32 = 1000;
const CONTRACT_NAME: &str = "MyContract";

#[storage]
#[entrypoint]
pub struct Contract {
    owner: StorageAddress,
}

#[public]
impl Contract {
    pub fn show_constants() -> ArbResult {
        let owner_address = Address::parse_checksummed(OWNER, None)
            .expect("Invalid address");

        console!("Contract: {}", CONTRACT_NAME);
        console!("Max Supply: {}", MAX_SUPPLY);
        console!("Owner Address: {}", owner_address);

        Ok(Vec::new())
    }
}"##;

pub(super) const STYLUS_FUNCTIONS: &str = r##"#![cfg_attr(not(any(feature = "export-abi", test)), no_main)]
extern crate alloc;

use stylus_sdk::alloy_primitives::{Address, U256};
use stylus_sdk::prelude::*;
use stylus_sdk::storage::{StorageAddress, StorageU256};
use stylus_sdk::console;

#[storage]
#[entrypoint]
pub struct Contract {
    owner: StorageAddress,
    value: StorageU256,
}

#[public]
impl Contract {
    pub fn get_value(&self) -> U256 {
        self.value.get()
    }

    pub fn set_value(&mut self, new_value: U256) -> Result<(), Vec<u8>> {
        self.value.set(new_value);
        Ok(())
    }

    pub fn get_contract_info(&self) -> (Address, U256) {
        (self.owner.get(), self.value.get())
    }
}

impl Contract {
    fn log_operation(&self, operation: &str) {
        console!("Performing operation: {}", operation);
    }

    fn validate_owner(&self) -> bool {
        self.owner.get() == msg::sender()
    }
}"##;
