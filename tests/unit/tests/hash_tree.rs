use anyhow::Result;
use aroni_core::{verify_proof, Error, HashTree, LeafHash};
use sha2::{Digest, Sha256};

fn leaf(byte: u8) -> LeafHash {
    LeafHash::from([byte; 32])
}

fn sorted_pair(a: [u8; 32], b: [u8; 32]) -> [u8; 32] {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(low);
    hasher.update(high);
    hasher.finalize().into()
}

#[test]
fn hash_tree_three_leaf_root() -> Result<()> {
    let leaves = ["cc".repeat(32), "aa".repeat(32), "bb".repeat(32)];
    let tree = HashTree::from_hex(&leaves)?;

    let inner = sorted_pair([0xaa; 32], [0xbb; 32]);
    let expected = sorted_pair(inner, [0xcc; 32]);
    assert_eq!(hex::encode(expected), tree.root_hex());
    Ok(())
}

#[test]
fn hash_tree_order_independent() -> Result<()> {
    let leaves: Vec<LeafHash> = [7u8, 3, 250, 19, 3, 88, 1]
        .into_iter()
        .map(leaf)
        .collect();
    let expected = HashTree::build(leaves.clone())?.root();

    let mut reversed = leaves.clone();
    reversed.reverse();
    assert_eq!(expected, HashTree::build(reversed)?.root());

    let mut rotated = leaves.clone();
    rotated.rotate_left(3);
    assert_eq!(expected, HashTree::build(rotated)?.root());

    // Building twice yields the same root and the same proofs
    let first = HashTree::build(leaves.clone())?;
    let mut shuffled = leaves;
    shuffled.swap(0, 5);
    let second = HashTree::build(shuffled)?;
    assert_eq!(expected, second.root());
    for index in 0..first.len() {
        assert_eq!(first.proof(index)?, second.proof(index)?);
    }
    Ok(())
}

#[test]
fn hash_tree_every_leaf_proves() -> Result<()> {
    for count in 1..=17u8 {
        let tree = HashTree::build((0..count).map(|i| leaf(i * 13)))?;
        let root = tree.root_hex();
        for (index, leaf) in tree.leaves().iter().enumerate() {
            let proof = tree.proof(index)?;
            assert!(
                verify_proof(&leaf.to_hex(), proof.to_hex().as_slice(), &root)?,
                "leaf {} of {} did not verify",
                index,
                count
            );
        }
    }
    Ok(())
}

#[test]
fn hash_tree_single_leaf() -> Result<()> {
    let only = leaf(0x42);
    let tree = HashTree::build([only])?;
    assert_eq!(only, tree.root());

    let proof = tree.proof(0)?;
    assert!(proof.is_empty());
    let empty: [&str; 0] = [];
    assert!(verify_proof(&only.to_hex(), &empty[..], &only.to_hex())?);
    Ok(())
}

#[test]
fn hash_tree_empty_batch() {
    let result = HashTree::build(Vec::<LeafHash>::new());
    assert!(matches!(result, Err(Error::EmptyBatch)));
}

#[test]
fn hash_tree_malformed_leaf() {
    let inputs = [
        "aa".repeat(31),
        "AA".repeat(32),
        format!("{}zz", "aa".repeat(31)),
        String::new(),
    ];
    for input in inputs {
        let result = HashTree::from_hex([input.as_str()]);
        assert!(matches!(result, Err(Error::MalformedHash(_))));
    }
}

#[test]
fn hash_tree_index_out_of_range() -> Result<()> {
    let tree = HashTree::build([leaf(1), leaf(2), leaf(3)])?;
    assert!(matches!(
        tree.proof(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    Ok(())
}

#[test]
fn hash_tree_rejects_non_member() -> Result<()> {
    let tree = HashTree::build((1..=6).map(leaf))?;
    let proof = tree.proof(2)?;
    assert!(!proof.verify(&leaf(99), &tree.root()));
    assert!(matches!(
        tree.proof_for_leaf(&leaf(99)),
        Err(Error::NotFound(_))
    ));
    Ok(())
}
