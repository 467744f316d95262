use emberd_consensus::Hash256;
use emberd_primitives::encoding::ByteReader;
use emberd_primitives::point::Point;
use emberd_primitives::{sha256, sha256d};

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u8(&mut self) -> u8 {
        self.next_u64() as u8
    }

    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            0
        } else {
            (self.next_u64() % max as u64) as usize
        }
    }
}

fn random_hash(rng: &mut Lcg) -> Hash256 {
    std::array::from_fn(|_| rng.next_u8())
}

#[test]
fn round_trip_random_points() {
    let mut rng = Lcg::new(0x0eed_1e55);

    for _ in 0..512 {
        let point = Point::new(random_hash(&mut rng), rng.next_u32());
        let encoded = point.to_data();
        assert_eq!(encoded.len(), Point::fixed_size());

        let mut decoded = Point::default();
        assert!(decoded.from_data(&encoded));
        assert_eq!(decoded, point);
    }
}

#[test]
fn round_trip_digest_hashes() {
    // Points whose hashes are real transaction-id style double digests.
    for i in 0u32..32 {
        let txid = sha256d(&i.to_le_bytes());
        assert_eq!(txid, sha256(&sha256(&i.to_le_bytes())));
        let point = Point::new(txid, i);

        let mut decoded = Point::default();
        assert!(decoded.from_data(&point.to_data()));
        assert_eq!(decoded, point);
        assert!(decoded.is_valid());
    }
}

#[test]
fn truncation_never_leaks_partial_state() {
    let mut rng = Lcg::new(0x7e57_da7a);

    for _ in 0..256 {
        let encoded = Point::new(random_hash(&mut rng), rng.next_u32()).to_data();
        let cut = rng.gen_range(encoded.len());

        let mut point = Point::new(random_hash(&mut rng), rng.next_u32());
        assert!(!point.from_data(&encoded[..cut]));
        assert_eq!(point, Point::default());
    }
}

#[test]
fn failed_reader_stays_failed_across_random_reads() {
    let mut rng = Lcg::new(0x5ca1_ab1e);

    for _ in 0..64 {
        let len = rng.gen_range(Point::fixed_size());
        let source: Vec<u8> = (0..len).map(|_| rng.next_u8()).collect();

        let mut reader = ByteReader::new(source.as_slice());
        let mut point = Point::default();
        assert!(!point.from_reader(&mut reader));
        assert!(!reader.is_ok());

        // Later reads on the same reader report failure too.
        assert_eq!(reader.read_u32_le(), 0);
        assert!(!reader.is_ok());
    }
}
