//! Property-based tests for the rendering contract

use proptest::prelude::*;
use vultr_cli::printer::{OutputMode, Printer};
use vultr_cli::render::{check_arity, PageMeta, Renderable};
use vultr_cli::resources::{
    Instance, InstanceListView, InstanceView, OperatingSystem, OsListView, Plan, PlanListView,
    Region, RegionListView,
};

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._-]{0,16}"
}

fn meta() -> impl Strategy<Value = PageMeta> {
    (any::<u32>(), word(), word()).prop_map(|(total, next, prev)| PageMeta {
        total_count: total as u64,
        next_cursor: next,
        prev_cursor: prev,
    })
}

fn operating_system() -> impl Strategy<Value = OperatingSystem> {
    (any::<i32>(), word(), word(), word()).prop_map(|(id, name, arch, family)| OperatingSystem {
        id: id as i64,
        name,
        arch,
        family,
    })
}

fn instance() -> impl Strategy<Value = Instance> {
    (word(), word(), any::<u16>(), prop::collection::vec(word(), 0..4)).prop_map(
        |(id, label, ram, tags)| Instance {
            id,
            label,
            ram: ram as i64,
            tags,
            ..Default::default()
        },
    )
}

/// Parse both documents a renderable produces into one comparable value
fn documents(view: &dyn Renderable) -> (serde_json::Value, serde_json::Value) {
    let json: serde_json::Value = serde_json::from_slice(&view.to_json().unwrap()).unwrap();
    let yaml: serde_json::Value = serde_yaml::from_slice(&view.to_yaml().unwrap()).unwrap();
    (json, yaml)
}

/// Every row of every list view has one cell per header
#[test]
fn test_list_view_arity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec(operating_system(), 0..8),
                prop::collection::vec(instance(), 0..8),
                meta(),
            ),
            |(os, instances, meta)| {
                let os_view = OsListView::new(os, meta.clone());
                assert!(check_arity(&os_view).is_ok());

                let instance_view = InstanceListView::new(instances, meta);
                assert!(check_arity(&instance_view).is_ok());

                Ok(())
            },
        )
        .unwrap();
}

/// Instance detail keeps both sections well-formed whatever the tag count
#[test]
fn test_instance_detail_arity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&instance(), |instance| {
            let tag_count = instance.tags.len();
            let view = InstanceView::new(instance);
            assert!(check_arity(&view).is_ok());

            let columns = view.columns();
            assert_eq!(columns.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
            let rows = view.rows();
            assert_eq!(rows.get(&1).map(|r| r.len()), Some(tag_count));

            Ok(())
        })
        .unwrap();
}

/// JSON and YAML documents always carry the same data
#[test]
fn test_json_yaml_agreement_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(operating_system(), 0..6), meta()),
            |(os, meta)| {
                let regions: Vec<Region> = os
                    .iter()
                    .map(|o| Region {
                        id: o.name.clone(),
                        city: o.arch.clone(),
                        country: o.family.clone(),
                        continent: String::new(),
                        options: vec![o.name.clone()],
                    })
                    .collect();
                let plans: Vec<Plan> = os
                    .iter()
                    .map(|o| Plan {
                        id: o.name.clone(),
                        vcpu_count: o.id,
                        monthly_cost: 5.0,
                        plan_type: o.family.clone(),
                        ..Default::default()
                    })
                    .collect();

                let views: Vec<Box<dyn Renderable>> = vec![
                    Box::new(OsListView::new(os, meta.clone())),
                    Box::new(RegionListView::new(regions, meta.clone())),
                    Box::new(PlanListView::new(plans, meta)),
                ];
                for view in &views {
                    let (json, yaml) = documents(view.as_ref());
                    assert_eq!(json, yaml);
                    assert!(json.get("meta").is_some());
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Table output is one header line, one line per record, then the two paging lines
#[test]
fn test_table_line_count_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(operating_system(), 1..10), meta()),
            |(os, meta)| {
                let count = os.len();
                let expected_summary = vultr_cli::printer::paging_summary(&meta);
                let view = OsListView::new(os, meta);

                let mut printer = Printer::new(OutputMode::Table, Vec::new(), Vec::new());
                let status = printer.display(&view, None);
                assert!(status.is_success());

                let (out, err) = printer.into_inner();
                assert!(err.is_empty());
                let text = String::from_utf8(out).unwrap();
                let lines: Vec<&str> = text.lines().collect();
                assert_eq!(lines.len(), count + 3);
                assert_eq!(lines[lines.len() - 1], expected_summary);

                Ok(())
            },
        )
        .unwrap();
}
