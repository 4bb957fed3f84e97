use rebarx_calc::{ResultTable, Warning, calculate_bar, evaluate_warnings};
use rebarx_model::{BarProperties, BarSize, GlobalInputs, InputModel};

fn models() -> Vec<InputModel> {
    let base = InputModel::default();
    let mut models = vec![base];
    for (required_area, slab_thickness, clear_span) in [
        (0.0, 300.0, 5700.0),
        (99.0, 30.0, 0.0),
        (12_345.6, 120.0, 9000.0),
        (700.0, 1000.0, 100.0),
    ] {
        models.push(InputModel::new(
            GlobalInputs {
                required_area,
                slab_thickness,
                clear_span,
                ..GlobalInputs::default()
            },
            base.bars,
        ));
    }
    models.push(base.with_bar(BarSize::M15, BarProperties::new(0.0, 0.0, 0.0)));
    models
}

#[test]
fn add_on_length_is_the_maximum() {
    for model in models() {
        for row in ResultTable::compute(&model).rows() {
            assert!(row.add_on_length >= row.effective_depth);
            assert!(row.add_on_length >= row.dev_length_db);
            assert!(row.add_on_length >= row.dev_length_span);
            assert!(
                row.add_on_length == row.effective_depth
                    || row.add_on_length == row.dev_length_db
                    || row.add_on_length == row.dev_length_span
            );
        }
    }
}

#[test]
fn governing_length_covers_both_candidates() {
    for model in models() {
        for row in ResultTable::compute(&model).rows() {
            assert!(row.governing_length >= row.required_length);
            assert!(row.governing_length >= row.code_length_03ln);
            assert_eq!(
                row.governing_length,
                row.required_length.max(row.code_length_03ln)
            );
        }
    }
}

#[test]
fn bar_count_is_smallest_sufficient() {
    for model in models() {
        let table = ResultTable::compute(&model);
        for (bar, row) in model.bar_specs().zip(table.rows()) {
            let required = model.globals.required_area;
            if required == 0.0 {
                assert_eq!(row.bar_count, 0);
                continue;
            }
            if bar.area_per_bar == 0.0 {
                continue;
            }
            let n = row.bar_count as f64;
            assert!(n * bar.area_per_bar >= required);
            assert!((n - 1.0) * bar.area_per_bar < required);
        }
    }
}

#[test]
fn spacing_defined_iff_two_or_more_bars() {
    for model in models() {
        for row in ResultTable::compute(&model).rows() {
            match row.spacing {
                Some(spacing) => {
                    assert!(row.bar_count >= 2);
                    let expected = model.globals.wall_length * 12.0 / (row.bar_count - 1) as f64;
                    assert_eq!(spacing, expected);
                }
                None => assert!(row.bar_count < 2),
            }
        }
    }
}

#[test]
fn recompute_is_idempotent() {
    for model in models() {
        assert_eq!(ResultTable::compute(&model), ResultTable::compute(&model));
    }
}

#[test]
fn rows_do_not_depend_on_other_bars() {
    let model = InputModel::default();
    let changed = model.with_bar(BarSize::M10, BarProperties::new(12.0, 110.0, 220.0));
    let before = ResultTable::compute(&model);
    let after = ResultTable::compute(&changed);
    for size in [BarSize::M15, BarSize::M20, BarSize::M25, BarSize::M30] {
        assert_eq!(before.row(size), after.row(size));
    }

    let bar = model.bar_specs().nth(3);
    let Some(bar) = bar else {
        panic!("five bars expected");
    };
    assert_eq!(before.row(BarSize::M25), Some(&calculate_bar(&model.globals, &bar)));
}

fn with_slab(slab_thickness: f64) -> InputModel {
    InputModel::new(
        GlobalInputs {
            slab_thickness,
            ..GlobalInputs::default()
        },
        InputModel::default().bars,
    )
}

fn depth_warnings(model: &InputModel) -> Vec<(BarSize, f64)> {
    evaluate_warnings(&ResultTable::compute(model))
        .into_iter()
        .filter_map(|warning| match warning {
            Warning::NegativeEffectiveDepth { size, value } => Some((size, value)),
            Warning::SpacingUndefined { .. } => None,
        })
        .collect()
}

#[test]
fn thin_slab_reports_30m_depth() {
    let warnings = depth_warnings(&with_slab(30.0));
    let Some((_, value)) = warnings.iter().find(|(size, _)| *size == BarSize::M30) else {
        panic!("30M depth warning expected");
    };
    assert!((value + 24.95).abs() < 1.0e-9);
    // Every default size is deeper than a 30 mm slab minus the 40 mm offset.
    assert_eq!(warnings.len(), 5);
}

#[test]
fn slab_between_25m_and_30m_limits_warns_for_30m_only() {
    let warnings = depth_warnings(&with_slab(54.0));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, BarSize::M30);
    assert!((warnings[0].1 + 0.95).abs() < 1.0e-9);
}

#[test]
fn zero_required_area_warns_for_every_bar() {
    let model = InputModel::new(
        GlobalInputs {
            required_area: 0.0,
            ..GlobalInputs::default()
        },
        InputModel::default().bars,
    );
    let table = ResultTable::compute(&model);
    assert!(table.rows().iter().all(|row| row.bar_count == 0 && row.spacing.is_none()));

    let warnings = evaluate_warnings(&table);
    assert_eq!(warnings.len(), 5);
    let sizes: Vec<BarSize> = warnings.iter().map(Warning::size).collect();
    assert_eq!(sizes, BarSize::ALL);
    assert!(
        warnings
            .iter()
            .all(|warning| matches!(warning, Warning::SpacingUndefined { bar_count: 0, .. }))
    );
}
