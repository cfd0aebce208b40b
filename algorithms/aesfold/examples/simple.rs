//! aesfold Basic Example
//!
//! Minimal usage: `let hash = aesfold::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let hash = aesfold::hash(data);

    println!("Data:    {:?}", String::from_utf8_lossy(data));
    println!("Hash:    {hash:016x}");
    println!("Backend: {}", aesfold::active_backend());
}
