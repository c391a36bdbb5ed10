//! Built-in question banks.

use crate::model::{Question, QuestionBank};

const BLOCKCHAIN: [(&str, [&str; 4], &str); 10] = [
    (
        "What is the main function of a smart contract?",
        [
            "To automate agreements",
            "To store data",
            "To create cryptocurrencies",
            "To mine blocks",
        ],
        "To automate agreements",
    ),
    (
        "Which language is primarily used for writing Ethereum smart contracts?",
        ["JavaScript", "Python", "Solidity", "C++"],
        "Solidity",
    ),
    (
        "What does ERC stand for in ERC20?",
        [
            "Ethereum Request for Comment",
            "Ethereum Reference Contract",
            "Ether Real Contract",
            "Ethereum Registered Code",
        ],
        "Ethereum Request for Comment",
    ),
    (
        "What is the maximum supply of Bitcoin?",
        ["18 million", "21 million", "15 million", "30 million"],
        "21 million",
    ),
    (
        "Which consensus algorithm does Ethereum currently use?",
        [
            "Proof of Work",
            "Proof of Stake",
            "Delegated Proof of Stake",
            "Proof of Authority",
        ],
        "Proof of Stake",
    ),
    (
        "Which of the following is NOT a blockchain?",
        ["Bitcoin", "Ethereum", "Hyperledger", "Google Cloud"],
        "Google Cloud",
    ),
    (
        "What is gas in the context of Ethereum?",
        [
            "Fuel for transactions",
            "A smart contract",
            "An EVM opcode",
            "Ether's equivalent",
        ],
        "Fuel for transactions",
    ),
    (
        "What is the purpose of a private key?",
        [
            "To encrypt messages",
            "To generate a public key",
            "To sign transactions",
            "To store tokens",
        ],
        "To sign transactions",
    ),
    (
        "What does 'mining' refer to in blockchain?",
        [
            "Finding a block",
            "Generating a wallet",
            "Sending tokens",
            "Using EVM opcodes",
        ],
        "Finding a block",
    ),
    (
        "Which of these networks is specifically designed for private blockchains?",
        ["Bitcoin", "Ethereum", "Quorum", "Polkadot"],
        "Quorum",
    ),
];

/// The blockchain quiz shipped with the app.
#[must_use]
pub fn blockchain_bank() -> QuestionBank {
    QuestionBank::new(
        BLOCKCHAIN
            .iter()
            .map(|(prompt, options, answer)| Question::new(*prompt, *options, *answer))
            .collect(),
    )
}
