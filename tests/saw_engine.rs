use spk_laptop::domain::laptop::Laptop;
use spk_laptop::error::RankingError;
use spk_laptop::scoring::engine::rank_laptops;
use spk_laptop::scoring::types::{Extrema, Weights};

#[test]
fn worked_example_ranks_b_over_a() {
    let weights = contoh_bobot();
    let laptops = vec![
        laptop("A", 1000.0, 8.0, 80.0, 70.0, 256.0, 1.5),
        laptop("B", 1500.0, 16.0, 90.0, 85.0, 512.0, 2.0),
    ];
    let extrema = Extrema {
        min_harga: 1000.0,
        max_ram: 16.0,
        max_prosesor: 90.0,
        max_gpu: 85.0,
        max_ssd: 512.0,
        min_berat: 1.5,
    };

    let ranked = rank_laptops(&weights, &laptops, &extrema).unwrap();

    assert_eq!(ranked[0].nama_laptop, "B");
    assert_eq!(ranked[0].skor, 0.875);
    assert_eq!(ranked[1].nama_laptop, "A");
    assert_eq!(ranked[1].skor, 0.8101);
}

#[test]
fn empty_candidate_set_is_not_found() {
    let extrema = Extrema {
        min_harga: 0.0,
        max_ram: 0.0,
        max_prosesor: 0.0,
        max_gpu: 0.0,
        max_ssd: 0.0,
        min_berat: 0.0,
    };

    let err = rank_laptops(&contoh_bobot(), &[], &extrema).unwrap_err();
    assert!(matches!(err, RankingError::NotFound));
}

#[test]
fn equal_scores_keep_retrieval_order() {
    let weights = contoh_bobot();
    let extrema = Extrema {
        min_harga: 1200.0,
        max_ram: 8.0,
        max_prosesor: 70.0,
        max_gpu: 60.0,
        max_ssd: 256.0,
        min_berat: 1.8,
    };
    let alpha = laptop("Alpha", 1200.0, 8.0, 70.0, 60.0, 256.0, 1.8);
    let beta = laptop("Beta", 1200.0, 8.0, 70.0, 60.0, 256.0, 1.8);

    let ranked = rank_laptops(&weights, &[alpha.clone(), beta.clone()], &extrema).unwrap();
    assert_eq!(ranked[0].nama_laptop, "Alpha");
    assert_eq!(ranked[1].nama_laptop, "Beta");

    let ranked = rank_laptops(&weights, &[beta, alpha], &extrema).unwrap();
    assert_eq!(ranked[0].nama_laptop, "Beta");
    assert_eq!(ranked[1].nama_laptop, "Alpha");
}

#[test]
fn identical_inputs_yield_identical_output() {
    let weights = contoh_bobot();
    let laptops = vec![
        laptop("A", 1000.0, 8.0, 80.0, 70.0, 256.0, 1.5),
        laptop("B", 1500.0, 16.0, 90.0, 85.0, 512.0, 2.0),
        laptop("C", 1300.0, 8.0, 85.0, 60.0, 512.0, 1.7),
    ];
    let extrema = Extrema {
        min_harga: 1000.0,
        max_ram: 16.0,
        max_prosesor: 90.0,
        max_gpu: 85.0,
        max_ssd: 512.0,
        min_berat: 1.5,
    };

    let first = rank_laptops(&weights, &laptops, &extrema).unwrap();
    let second = rank_laptops(&weights, &laptops, &extrema).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_cost_value_scores_zero_for_that_criterion() {
    let weights = Weights {
        harga: 1.0,
        ram: 0.0,
        prosesor: 0.0,
        gpu: 0.0,
        ssd: 0.0,
        berat: 0.0,
    };
    let gratis = laptop("Gratis", 0.0, 8.0, 70.0, 60.0, 256.0, 1.8);
    let extrema = Extrema {
        min_harga: 0.0,
        max_ram: 8.0,
        max_prosesor: 70.0,
        max_gpu: 60.0,
        max_ssd: 256.0,
        min_berat: 1.8,
    };

    let ranked = rank_laptops(&weights, &[gratis], &extrema).unwrap();
    assert_eq!(ranked[0].skor, 0.0);
}

#[test]
fn zero_benefit_max_scores_zero_for_all_candidates() {
    let weights = Weights {
        harga: 0.0,
        ram: 1.0,
        prosesor: 0.0,
        gpu: 0.0,
        ssd: 0.0,
        berat: 0.0,
    };
    let laptops = vec![
        laptop("A", 1000.0, 0.0, 70.0, 60.0, 256.0, 1.8),
        laptop("B", 1200.0, 0.0, 80.0, 70.0, 512.0, 1.5),
    ];
    let extrema = Extrema {
        min_harga: 1000.0,
        max_ram: 0.0,
        max_prosesor: 80.0,
        max_gpu: 70.0,
        max_ssd: 512.0,
        min_berat: 1.5,
    };

    let ranked = rank_laptops(&weights, &laptops, &extrema).unwrap();
    assert_eq!(ranked[0].skor, 0.0);
    assert_eq!(ranked[1].skor, 0.0);
}

#[test]
fn raising_a_benefit_weight_never_demotes_its_leader() {
    let laptops = vec![
        laptop("X", 1500.0, 16.0, 60.0, 60.0, 256.0, 2.0),
        laptop("Y", 1000.0, 8.0, 90.0, 85.0, 512.0, 1.5),
    ];
    let extrema = Extrema {
        min_harga: 1000.0,
        max_ram: 16.0,
        max_prosesor: 90.0,
        max_gpu: 85.0,
        max_ssd: 512.0,
        min_berat: 1.5,
    };

    let mut weights = contoh_bobot();
    weights.ram = 0.0;
    let before = rank_laptops(&weights, &laptops, &extrema).unwrap();
    let pos_before = posisi(&before, "X");

    weights.ram = 2.0;
    let after = rank_laptops(&weights, &laptops, &extrema).unwrap();
    let pos_after = posisi(&after, "X");

    assert!(pos_after <= pos_before);
}

fn posisi(ranked: &[spk_laptop::scoring::types::RankedLaptop], nama: &str) -> usize {
    ranked
        .iter()
        .position(|r| r.nama_laptop == nama)
        .expect("laptop in ranking")
}

fn contoh_bobot() -> Weights {
    Weights {
        harga: 0.3,
        ram: 0.2,
        prosesor: 0.2,
        gpu: 0.1,
        ssd: 0.1,
        berat: 0.1,
    }
}

fn laptop(
    nama: &str,
    harga: f64,
    ram: f64,
    skor_prosesor: f64,
    skor_gpu: f64,
    ssd: f64,
    berat: f64,
) -> Laptop {
    Laptop {
        nama_laptop: nama.to_string(),
        harga,
        ram,
        skor_prosesor,
        skor_gpu,
        ssd,
        berat,
    }
}
