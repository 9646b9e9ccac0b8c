//! End-to-end walkthrough: inserts, membership, a bounded descending read
//! with early termination, a delete, and a full scan.

use byteset::{ByteSet, KeyEncode};

fn main() {
    let mut set = ByteSet::new();

    let replaced = set.set(b"hi");
    println!("replaced: {}", replaced);

    let gotten = set.has(b"hi");
    println!("gotten: {}", gotten);

    // Twenty big-endian integer keys; encoded order matches numeric order.
    for i in 0..20u64 {
        set.set(&i.key_bytes());
    }

    // Read three keys from 7 downward.
    let pivot = 7u64.key_bytes();
    let mut line = String::new();
    let mut taken = 0;
    set.descend(Some(&pivot), |key| {
        let value = u64::from_be_bytes(key.try_into().expect("8-byte key"));
        line.push_str(&format!("{} ", value));
        taken += 1;
        taken < 3
    });
    println!("{}", line); // 7 6 5

    set.delete(&pivot);

    line.clear();
    set.scan(|key| {
        if key.len() == 8 {
            let value = u64::from_be_bytes(key.try_into().expect("8-byte key"));
            line.push_str(&format!("{} ", value));
        } else {
            line.push_str(&format!("{} ", String::from_utf8_lossy(key)));
        }
        true
    });
    println!("{}", line); // 0 1 2 3 4 5 6 8 ... 19 hi
}
