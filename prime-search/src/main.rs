use prime_search::{product_checksum, smallest_prime_with_digits};

fn main() {
    let p10 = smallest_prime_with_digits(10);
    let p11 = smallest_prime_with_digits(11);

    println!("Smallest 10-digit prime: {p10}");
    println!("Smallest 11-digit prime: {p11}");
    println!(
        "Checksum of their product (last 15 digits): {:015}",
        product_checksum(p10, p11)
    );
}
