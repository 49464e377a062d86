use lazystream::Stream;

// Classic sieve of Eratosthenes over a lazy stream: keep the head as
// a prime, filter its multiples out of the rest, recurse on demand.
fn sieve(s: Stream<u64>) -> Stream<u64> {
  let p = *s.head();
  let rest = s.filter(move |n| n % p != 0);
  Stream::new(p, move || sieve(rest.clone()))
}

fn main() {
  let nats = Stream::seed(0u64);
  let first: Vec<u64> = nats.take(10).collect();
  println!("naturals: {:?}", first);

  let fibs = Stream::unfold((0u64, 1u64), |(a, b)| Some((a, (b, a + b))));
  println!("fib:      {:?}", fibs.take(10).collect::<Vec<_>>());

  let evens: Vec<u64> = Stream::seed(1u64).map(|n| n * 2).take(5).collect();
  println!("evens:    {:?}", evens);

  let primes = sieve(Stream::seed(2));
  println!("primes:   {:?}", primes.take(10).collect::<Vec<_>>());

  let triangle = Stream::seed(1u64).take(100).fold(0, |x, y| x + y);
  println!("sum 1..=100: {}", triangle);
}
