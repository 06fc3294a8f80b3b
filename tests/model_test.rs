use std::io::Write;

use credit_score::model::Scaler;
use credit_score::{
    Classifier, CreditMix, CreditScoreError, CreditScorer, ModelArtifact, ModelSource, RawInput,
    SoftmaxModel, encode,
};

const CLASSES: [&str; 5] = ["Poor", "Standard", "Good", "Very Good", "Excellent"];

/// Five classes driven almost entirely by credit mix and delayed payments.
fn artifact() -> ModelArtifact {
    let row = |mix: f64, delays: f64| vec![0.0, 0.0, 0.0, 0.0, mix, 0.0, 0.0, delays];
    ModelArtifact {
        name: "test-softmax".into(),
        classes: CLASSES.iter().map(|s| s.to_string()).collect(),
        weights: vec![
            row(-2.0, 0.5),
            row(-1.0, 0.25),
            row(0.0, 0.0),
            row(1.0, -0.25),
            row(2.0, -0.5),
        ],
        intercepts: vec![0.0; 5],
        scaler: None,
    }
}

fn applicant(mix: CreditMix, delays: u32) -> RawInput {
    RawInput::new()
        .age(35)
        .monthly_income(4_000.0)
        .loan_amount(10_000.0)
        .num_loans(1)
        .credit_mix(mix)
        .outstanding_debt(500.0)
        .interest_rate(8)
        .delayed_payments(delays)
}

#[test]
fn test_probabilities_sum_to_one() {
    let model = SoftmaxModel::from_artifact(artifact()).unwrap();
    let features = encode(&applicant(CreditMix::Standard, 3)).unwrap();
    let p = model.predict_proba(&features).unwrap();
    assert_eq!(p.len(), 5);
    assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!(p.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_predict_is_argmax() {
    let model = SoftmaxModel::from_artifact(artifact()).unwrap();
    for (mix, delays) in [
        (CreditMix::Bad, 10),
        (CreditMix::Standard, 0),
        (CreditMix::Good, 0),
        (CreditMix::Good, 20),
    ] {
        let features = encode(&applicant(mix, delays)).unwrap();
        let label = model.predict(&features).unwrap();
        let p = model.predict_proba(&features).unwrap();
        let best = p
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(label, CLASSES[best]);
    }
}

#[test]
fn test_good_mix_no_delays_scores_excellent() {
    let model = SoftmaxModel::from_artifact(artifact()).unwrap();
    let features = encode(&applicant(CreditMix::Good, 0)).unwrap();
    assert_eq!(model.predict(&features).unwrap(), "Excellent");

    let features = encode(&applicant(CreditMix::Bad, 12)).unwrap();
    assert_eq!(model.predict(&features).unwrap(), "Poor");
}

#[test]
fn test_scaler_is_applied() {
    let mut scaled = artifact();
    // Shift delayed payments so that 10 delays looks like none.
    let mut mean = vec![0.0; 8];
    mean[7] = 10.0;
    scaled.scaler = Some(Scaler {
        mean,
        scale: vec![1.0; 8],
    });
    let model = SoftmaxModel::from_artifact(scaled).unwrap();
    let features = encode(&applicant(CreditMix::Standard, 10)).unwrap();
    let p = model.predict_proba(&features).unwrap();

    let unscaled = SoftmaxModel::from_artifact(artifact()).unwrap();
    let reference = unscaled
        .predict_proba(&encode(&applicant(CreditMix::Standard, 0)).unwrap())
        .unwrap();
    for (a, b) in p.iter().zip(&reference) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_class_labels_reported() {
    let model = SoftmaxModel::from_artifact(artifact()).unwrap();
    assert_eq!(model.name(), "test-softmax");
    assert_eq!(model.class_labels().unwrap(), CLASSES);
}

#[test]
fn test_invalid_artifacts_rejected() {
    let mut a = artifact();
    a.weights.pop();
    assert!(matches!(
        SoftmaxModel::from_artifact(a),
        Err(CreditScoreError::Model(_))
    ));

    let mut a = artifact();
    a.weights[2].push(1.0);
    assert!(SoftmaxModel::from_artifact(a).is_err());

    let mut a = artifact();
    a.intercepts = vec![0.0; 4];
    assert!(SoftmaxModel::from_artifact(a).is_err());

    let mut a = artifact();
    a.classes[4] = "Poor".into();
    assert!(SoftmaxModel::from_artifact(a).is_err());

    let mut a = artifact();
    a.weights[0][0] = f64::NAN;
    assert!(SoftmaxModel::from_artifact(a).is_err());

    let mut a = artifact();
    a.scaler = Some(Scaler {
        mean: vec![0.0; 8],
        scale: vec![0.0; 8],
    });
    assert!(SoftmaxModel::from_artifact(a).is_err());

    let mut a = artifact();
    a.classes.clear();
    a.weights.clear();
    a.intercepts.clear();
    assert!(SoftmaxModel::from_artifact(a).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&artifact()).unwrap()).unwrap();

    let model = ModelSource::local(file.path()).load().unwrap();
    assert_eq!(model.artifact(), &artifact());

    let scorer = CreditScorer::builder().classifier(model).build().unwrap();
    let result = scorer.assess(&applicant(CreditMix::Good, 0)).unwrap();
    assert_eq!(result.label, "Excellent");
    assert_eq!(result.rank, 5);
}

#[test]
fn test_load_defaults_name_and_scaler() {
    let json = r#"{
        "classes": ["Low", "High"],
        "weights": [[0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,1]],
        "intercepts": [0, 0]
    }"#;
    let model = SoftmaxModel::from_json(json).unwrap();
    assert_eq!(model.name(), "softmax");
    assert!(model.artifact().scaler.is_none());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelSource::local(dir.path().join("absent.json"))
        .load()
        .unwrap_err();
    assert!(matches!(err, CreditScoreError::Model(msg) if msg.contains("does not exist")));
}

#[test]
fn test_load_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(
        ModelSource::local(file.path()).load(),
        Err(CreditScoreError::Model(_))
    ));
}

#[test]
fn test_in_memory_source() {
    let model = ModelSource::Artifact(artifact()).load().unwrap();
    assert_eq!(model.class_labels().unwrap().len(), 5);
}

#[test]
fn test_scorer_rejects_model_with_other_classes() {
    let mut a = artifact();
    a.classes = ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
    let model = SoftmaxModel::from_artifact(a).unwrap();
    assert!(matches!(
        CreditScorer::builder().classifier(model).build(),
        Err(CreditScoreError::Configuration(_))
    ));
}
