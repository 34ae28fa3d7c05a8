use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use approx::assert_relative_eq;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
    registry,
};
use windpower_models::{PowerCurveTable, WindClass};
use windpower_udf::{Columns, Datum, UdfConfig, UdfError, WindPowerUdf};

#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = WarnCounter::default();
    let result = tracing::subscriber::with_default(registry().with(counter.clone()), f);
    (result, counter.0.load(Ordering::SeqCst))
}

#[test]
fn batch_matches_row_by_row_calls() {
    let udf = WindPowerUdf::default();
    let classes = [Some(1), Some(2), None, Some(4), Some(3)];
    let speeds = [Some(10.0), Some(2.0), Some(10.0), Some(30.0), Some(15.0)];
    let heights = [Some(0.0), Some(50.0), Some(0.0), Some(0.0), None];
    let temperatures = [Some(288.15), Some(290.0), Some(288.15), Some(270.0), Some(280.0)];

    let output = udf
        .invoke_batch(&Columns {
            wind_class: &classes,
            mean_wind_speed: &speeds,
            height: &heights,
            temperature: &temperatures,
        })
        .unwrap();

    assert_eq!(output.class_fallbacks, 0);
    assert_eq!(output.values.len(), 5);
    assert_eq!(output.values[2], None);
    assert_eq!(output.values[4], None);
    assert_eq!(output.values[1], Some(0.0));
    assert_eq!(output.values[3], Some(0.0));

    let scalar = udf
        .invoke(&[Datum::Int(1), Datum::Float(10.0), Datum::Float(0.0), Datum::Float(288.15)])
        .unwrap();
    assert_eq!(scalar, Datum::from(output.values[0]));
    assert_relative_eq!(output.values[0].unwrap(), 1_598.063_473_879_99, epsilon = 1e-6);
}

#[test]
fn batch_fallbacks_produce_one_warning() {
    let udf = WindPowerUdf::default();
    let classes = [Some(0), Some(1), Some(5), Some(9)];
    let speeds = [Some(10.0); 4];
    let heights = [Some(0.0); 4];
    let temperatures = [Some(288.15); 4];

    let (output, warnings) = count_warnings(|| {
        udf.invoke_batch(&Columns {
            wind_class: &classes,
            mean_wind_speed: &speeds,
            height: &heights,
            temperature: &temperatures,
        })
        .unwrap()
    });

    assert_eq!(output.class_fallbacks, 3);
    assert_eq!(warnings, 1);

    let first = output.values[0];
    assert!(output.values.iter().all(|&kw| kw == first));
}

#[test]
fn scalar_fallback_warns_per_call() {
    let udf = WindPowerUdf::default();
    let call = [Datum::Int(7), Datum::Float(10.0), Datum::Float(0.0), Datum::Float(288.15)];

    let (_, warnings) = count_warnings(|| {
        udf.invoke(&call).unwrap();
        udf.invoke(&call).unwrap();
    });
    assert_eq!(warnings, 2);
}

#[test]
fn mismatched_columns_are_rejected() {
    let udf = WindPowerUdf::default();
    let err = udf
        .invoke_batch(&Columns {
            wind_class: &[Some(1), Some(1)],
            mean_wind_speed: &[Some(10.0), Some(10.0)],
            height: &[Some(0.0)],
            temperature: &[Some(288.15), Some(288.15)],
        })
        .unwrap_err();

    assert!(matches!(
        err,
        UdfError::ColumnLength {
            column: "height",
            expected: 2,
            found: 1,
        }
    ));
}

#[test]
fn failing_row_is_reported() {
    let udf = WindPowerUdf::default();
    let err = udf
        .invoke_batch(&Columns {
            wind_class: &[Some(1), Some(1), Some(1)],
            mean_wind_speed: &[Some(10.0), Some(f64::NAN), Some(10.0)],
            height: &[Some(0.0); 3],
            temperature: &[Some(288.15); 3],
        })
        .unwrap_err();

    assert!(matches!(err, UdfError::Row { row: 1, .. }));
}

#[test]
fn configured_function_uses_its_curve_set() {
    let current = WindPowerUdf::from_config(&UdfConfig::default());
    let config = UdfConfig::from_toml_str("name = \"wp_v1\"\ncurves = \"legacy\"").unwrap();
    let legacy = WindPowerUdf::from_config(&config);

    assert_eq!(legacy.name(), "wp_v1");
    assert!(legacy.signature().to_string().starts_with("wp_v1(int, "));

    let call = [Datum::Int(2), Datum::Float(9.0), Datum::Float(0.0), Datum::Float(288.15)];
    assert_ne!(current.invoke(&call).unwrap(), legacy.invoke(&call).unwrap());
}

#[test]
fn legacy_curves_take_kelvin() {
    let config = UdfConfig::from_toml_str("curves = \"legacy\"").unwrap();
    let udf = WindPowerUdf::from_config(&config);

    // At 288.15 K the density ratio is one, so the result is the raw ramp.
    #[allow(deprecated)]
    let ramp = PowerCurveTable::LEGACY.curve(WindClass::I).ramp().evaluate(10.0);
    let call = [Datum::Int(1), Datum::Float(10.0), Datum::Float(0.0), Datum::Float(288.15)];
    let Datum::Float(kw) = udf.invoke(&call).unwrap() else {
        panic!("expected a float result");
    };
    assert_relative_eq!(kw, ramp, max_relative = 1e-12);
}
