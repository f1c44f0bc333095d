use chrono::NaiveDate;
use jetlag_planner::{AdjustmentStrategy, Direction, Wizard, WizardStep};

fn walk_to_strategy(wizard: &mut Wizard) {
    wizard.advance("").unwrap();
    wizard.advance("London").unwrap();
    wizard.advance("Tokyo").unwrap();
    wizard.advance("2024-03-01T22:00").unwrap();
    wizard.advance("2024-03-02T08:00").unwrap();
    assert_eq!(wizard.step(), WizardStep::Strategy);
}

#[test]
fn full_walkthrough_produces_plan() {
    let mut wizard = Wizard::default();
    assert_eq!(wizard.step(), WizardStep::Landing);
    walk_to_strategy(&mut wizard);

    assert_eq!(wizard.advance("1").unwrap(), WizardStep::Bedtime);
    assert_eq!(wizard.advance("23:00").unwrap(), WizardStep::WakeTime);
    assert_eq!(wizard.advance("07:00").unwrap(), WizardStep::Results);

    let result = wizard.result().expect("plan computed");
    assert_eq!(result.time_zone_difference_hours, 10);
    assert_eq!(result.direction, Direction::Ahead);
    assert_eq!(result.start_date(), NaiveDate::from_ymd_opt(2024, 3, 2));
    assert_eq!(wizard.labels().route().as_deref(), Some("London -> Tokyo"));
}

#[test]
fn before_departure_visits_days_step() {
    let mut wizard = Wizard::default();
    walk_to_strategy(&mut wizard);

    assert_eq!(wizard.advance("3").unwrap(), WizardStep::DaysBefore);
    assert_eq!(wizard.advance("2").unwrap(), WizardStep::Bedtime);
    assert_eq!(wizard.back(), WizardStep::DaysBefore);
    assert_eq!(wizard.advance("two").unwrap(), WizardStep::Bedtime);
    wizard.advance("").unwrap();
    wizard.advance("").unwrap();

    let result = wizard.result().unwrap();
    assert_eq!(result.start_date(), NaiveDate::from_ymd_opt(2024, 3, 1));
}

#[test]
fn days_before_answer_shifts_start_date() {
    let mut wizard = Wizard::default();
    walk_to_strategy(&mut wizard);
    wizard.advance("before-departure").unwrap();
    wizard.advance("2").unwrap();
    wizard.advance("22:00").unwrap();
    wizard.advance("06:00").unwrap();
    assert_eq!(
        wizard.result().unwrap().start_date(),
        NaiveDate::from_ymd_opt(2024, 2, 28)
    );
}

#[test]
fn rejected_answer_keeps_step() {
    let mut wizard = Wizard::default();
    wizard.advance("").unwrap();
    wizard.advance("").unwrap();
    wizard.advance("").unwrap();
    assert_eq!(wizard.step(), WizardStep::DepartureTime);
    assert!(wizard.advance("next tuesday").is_err());
    assert_eq!(wizard.step(), WizardStep::DepartureTime);

    wizard.advance("2024-03-01T22:00").unwrap();
    wizard.advance("2024-03-02T08:00").unwrap();
    assert!(wizard.advance("hitchhike").is_err());
    assert_eq!(wizard.step(), WizardStep::Strategy);
}

#[test]
fn back_from_results_clears_plan_and_restart_resets() {
    let mut wizard = Wizard::default();
    walk_to_strategy(&mut wizard);
    wizard.advance("on-plane").unwrap();
    wizard.advance("").unwrap();
    wizard.advance("").unwrap();
    assert!(wizard.result().is_some());

    assert_eq!(wizard.back(), WizardStep::WakeTime);
    assert!(wizard.result().is_none());
    assert_eq!(wizard.back(), WizardStep::Bedtime);
    assert_eq!(wizard.back(), WizardStep::Strategy);

    wizard.restart();
    assert_eq!(wizard.step(), WizardStep::Landing);
    assert_eq!(wizard.back(), WizardStep::Landing);
    assert_eq!(wizard.labels().route(), None);
}

#[test]
fn step_transitions_skip_days_for_other_strategies() {
    assert_eq!(
        WizardStep::Strategy.next(Some(AdjustmentStrategy::OnPlane)),
        WizardStep::Bedtime
    );
    assert_eq!(
        WizardStep::Strategy.next(Some(AdjustmentStrategy::BeforeDeparture { days_before: 0 })),
        WizardStep::DaysBefore
    );
    assert_eq!(
        WizardStep::Bedtime.previous(Some(AdjustmentStrategy::AfterArrival)),
        WizardStep::Strategy
    );
    assert_eq!(WizardStep::Results.next(None), WizardStep::Results);
}
