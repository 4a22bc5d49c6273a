//! Rule-based recommendation engine.
//!
//! The engine maps a [`HealthProfile`] to a [`TreatmentPlan`]. Every rule is evaluated
//! independently and none suppresses another. Output order is fixed:
//!
//! 1. weight (from BMI, omitted for the normal band)
//! 2. sleep
//! 3. exercise
//! 4. stress
//! 5. preventive: age, diabetes, hypertension, family heart history, mental health
//! 6. diet: junk food, then general advice
//!
//! The engine holds no mutable state and has no error channel. Inputs are expected to be
//! range-checked by the intake boundary first.

use crate::bmi::{BmiCategory, BmiResult};
use crate::constants::{SLEEP_MAX_HOURS, SLEEP_MIN_HOURS};
use crate::keywords::RuleSet;
use crate::plan::{Recommendation, Rule, TreatmentPlan};
use crate::profile::{ExerciseFrequency, HealthProfile, JunkFoodIntake};
use careplan_types::ReportedText;

const WEIGHT_GAIN: &str = "Consider increasing your caloric intake with nutrient-dense foods. Focus on proteins, healthy fats, and complex carbohydrates.";
const WEIGHT_LOSS: &str = "Consider a moderate caloric deficit through balanced diet and regular exercise to achieve a healthier weight.";
const WEIGHT_CONSULT: &str = "It's advisable to consult with a healthcare provider for a comprehensive weight management plan.";

const SLEEP_UNDER: &str = "Your sleep duration appears to be below the recommended range. Aim for 7-9 hours of quality sleep per night. Consider establishing a regular sleep schedule and creating a restful environment.";
const SLEEP_OVER: &str = "You're getting more sleep than average. While extra sleep isn't necessarily harmful, excessive sleep can sometimes indicate underlying health issues. Monitor how you feel during the day.";
const SLEEP_IN_RANGE: &str = "Your sleep duration falls within the recommended range. Continue maintaining this healthy sleep pattern.";

const EXERCISE_START: &str = "Regular physical activity is important for overall health. Consider starting with light activities like walking for 15-30 minutes daily and gradually increase intensity.";
const EXERCISE_CONSISTENCY: &str = "Try to establish a more consistent exercise routine. Aim for at least 150 minutes of moderate activity or 75 minutes of vigorous activity per week.";
const EXERCISE_MAINTAIN: &str = "Great job maintaining regular exercise! Continue with your routine and consider incorporating variety in workouts for overall fitness.";

const AGE_CHECKUP: &str = "Consider regular health check-ups including blood pressure monitoring, cholesterol screening, and other age-appropriate screenings.";
const DIABETES_CARE: &str = "For diabetes management, regular blood glucose monitoring is essential. Consider consulting with a dietitian for meal planning.";
const HYPERTENSION_CARE: &str = "For hypertension management, consider the DASH diet approach and regular blood pressure monitoring.";
const CARDIOVASCULAR_SCREENING: &str = "Given your family history of heart-related conditions, consider cardiovascular screenings and heart-healthy lifestyle choices.";
const MENTAL_HEALTH_SUPPORT: &str = "For mental health support, consider regular check-ins with mental health professionals and explore techniques like meditation or cognitive behavioral therapy approaches.";

const JUNK_FOOD_REDUCE: &str = "Consider gradually reducing processed food intake. Try incorporating more whole foods like fruits, vegetables, and lean proteins into your diet.";
const JUNK_FOOD_MODERATE: &str = "You're making good progress with moderating junk food. Try to further limit processed foods and increase whole food consumption.";
const JUNK_FOOD_MAINTAIN: &str = "Great job maintaining a low junk food intake! Continue focusing on whole, nutrient-dense foods.";
const BALANCED_DIET: &str = "Aim for a balanced diet that includes a variety of vegetables, fruits, lean proteins, and whole grains. Stay hydrated by drinking adequate water throughout the day.";

/// Stress advice. The occupation is interpolated verbatim, even when empty.
fn stress_text(occupation: &str) -> String {
    format!(
        "Based on your occupation as {occupation}, consider incorporating stress management techniques such as mindfulness, deep breathing exercises, or short breaks during work hours."
    )
}

/// Generate a plan with the default rule set.
pub fn generate_plan(profile: &HealthProfile) -> TreatmentPlan {
    RecommendationEngine::default().generate_plan(profile)
}

/// Recommendation engine bound to a rule set.
#[derive(Clone, Debug, Default)]
pub struct RecommendationEngine {
    rules: RuleSet,
}

/// Collects entries in evaluation order.
struct PlanBuilder(Vec<Recommendation>);

impl PlanBuilder {
    fn push(&mut self, rule: Rule, text: impl Into<String>) {
        tracing::debug!(?rule, "rule fired");
        self.0.push(Recommendation {
            section: rule.section(),
            rule,
            text: text.into(),
        });
    }
}

impl RecommendationEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Evaluate every rule against `profile`.
    pub fn generate_plan(&self, profile: &HealthProfile) -> TreatmentPlan {
        let mut out = PlanBuilder(Vec::new());

        let bmi = BmiResult::from_measurements(profile.height_cm, profile.weight_kg);
        if let Some(bmi) = &bmi {
            match bmi.category {
                BmiCategory::Underweight => out.push(Rule::WeightGain, WEIGHT_GAIN),
                BmiCategory::Normal => {}
                BmiCategory::Overweight => out.push(Rule::WeightLoss, WEIGHT_LOSS),
                BmiCategory::Obese => out.push(Rule::WeightConsult, WEIGHT_CONSULT),
            }
        }

        if profile.sleep_hours < SLEEP_MIN_HOURS {
            out.push(Rule::SleepUnder, SLEEP_UNDER);
        } else if profile.sleep_hours > SLEEP_MAX_HOURS {
            out.push(Rule::SleepOver, SLEEP_OVER);
        } else {
            out.push(Rule::SleepInRange, SLEEP_IN_RANGE);
        }

        match profile.exercise_frequency {
            ExerciseFrequency::Never => out.push(Rule::ExerciseStart, EXERCISE_START),
            ExerciseFrequency::Occasionally => {
                out.push(Rule::ExerciseConsistency, EXERCISE_CONSISTENCY)
            }
            ExerciseFrequency::Regularly => out.push(Rule::ExerciseMaintain, EXERCISE_MAINTAIN),
        }

        out.push(Rule::StressManagement, stress_text(&profile.occupation));

        if profile.age > self.rules.checkup_age_above {
            out.push(Rule::AgeCheckup, AGE_CHECKUP);
        }

        let history = &profile.history;
        let conditions = reported(&history.medical_conditions);
        if self.rules.diabetes.matches(conditions) {
            out.push(Rule::DiabetesCare, DIABETES_CARE);
        }
        if self.rules.hypertension.matches(conditions) {
            out.push(Rule::HypertensionCare, HYPERTENSION_CARE);
        }
        if self.rules.cardiac.matches(reported(&history.family_history)) {
            out.push(Rule::CardiovascularScreening, CARDIOVASCULAR_SCREENING);
        }
        if history.mental_health.is_some() {
            out.push(Rule::MentalHealthSupport, MENTAL_HEALTH_SUPPORT);
        }

        match profile.junk_food {
            JunkFoodIntake::High => out.push(Rule::JunkFoodReduce, JUNK_FOOD_REDUCE),
            JunkFoodIntake::Moderate => out.push(Rule::JunkFoodModerate, JUNK_FOOD_MODERATE),
            JunkFoodIntake::Low => out.push(Rule::JunkFoodMaintain, JUNK_FOOD_MAINTAIN),
        }
        out.push(Rule::BalancedDiet, BALANCED_DIET);

        TreatmentPlan::new(bmi, out.0)
    }
}

fn reported(text: &Option<ReportedText>) -> &str {
    text.as_ref().map(ReportedText::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordSet;
    use crate::plan::Section;
    use crate::profile::{Gender, MedicalHistory, MenstrualCycle};

    fn baseline() -> HealthProfile {
        HealthProfile {
            full_name: "Sarah Williams".into(),
            age: 30,
            gender: Gender::Female,
            occupation: "librarian".into(),
            height_cm: 170.0,
            weight_kg: 70.0,
            history: MedicalHistory::default(),
            sleep_hours: 7,
            exercise_frequency: ExerciseFrequency::Regularly,
            junk_food: JunkFoodIntake::Low,
            menstrual_cycle: MenstrualCycle::Regular,
        }
    }

    fn rules_of(plan: &TreatmentPlan) -> Vec<Rule> {
        plan.recommendations().iter().map(|r| r.rule).collect()
    }

    fn text(s: &str) -> Option<ReportedText> {
        ReportedText::from_input(s)
    }

    #[test]
    fn baseline_scenario() {
        let plan = generate_plan(&baseline());

        let bmi = plan.bmi().expect("bmi computed");
        assert_eq!(bmi.display_value(), "24.2");
        assert_eq!(bmi.category.label(), "Normal weight");

        assert_eq!(
            rules_of(&plan),
            vec![
                Rule::SleepInRange,
                Rule::ExerciseMaintain,
                Rule::StressManagement,
                Rule::JunkFoodMaintain,
                Rule::BalancedDiet,
            ]
        );
        assert!(plan.recommendations()[1].text.starts_with("Great job"));
        assert!(plan.recommendations()[3].text.starts_with("Great job"));
        assert_eq!(plan.section(Section::Preventive).count(), 0);
        assert_eq!(plan.section(Section::Weight).count(), 0);
    }

    #[test]
    fn weight_recommendation_follows_bmi_band() {
        let mut p = baseline();
        p.height_cm = 100.0;

        p.weight_kg = 18.0;
        assert!(generate_plan(&p).contains(Rule::WeightGain));
        p.weight_kg = 18.5;
        assert_eq!(generate_plan(&p).section(Section::Weight).count(), 0);
        p.weight_kg = 25.0;
        assert!(generate_plan(&p).contains(Rule::WeightLoss));
        p.weight_kg = 30.0;
        assert!(generate_plan(&p).contains(Rule::WeightConsult));
    }

    #[test]
    fn weight_entry_comes_first() {
        let mut p = baseline();
        p.weight_kg = 120.0;
        let plan = generate_plan(&p);
        assert_eq!(plan.recommendations()[0].rule, Rule::WeightConsult);
        assert_eq!(plan.recommendations()[0].section, Section::Weight);
    }

    #[test]
    fn bmi_omitted_without_measurements() {
        let mut p = baseline();
        p.height_cm = 0.0;
        let plan = generate_plan(&p);
        assert!(plan.bmi().is_none());
        assert_eq!(plan.section(Section::Weight).count(), 0);
        assert!(plan.contains(Rule::SleepInRange));
    }

    #[test]
    fn sleep_bands() {
        let mut p = baseline();
        for hours in 1..=12u8 {
            p.sleep_hours = hours;
            let plan = generate_plan(&p);
            let sleep: Vec<Rule> = plan.section(Section::Sleep).map(|r| r.rule).collect();
            let expected = match hours {
                1..=5 => Rule::SleepUnder,
                6..=9 => Rule::SleepInRange,
                _ => Rule::SleepOver,
            };
            assert_eq!(sleep, vec![expected], "sleep_hours={hours}");
        }
    }

    #[test]
    fn exactly_one_exercise_and_junk_food_entry() {
        let mut p = baseline();
        for exercise in [
            ExerciseFrequency::Regularly,
            ExerciseFrequency::Occasionally,
            ExerciseFrequency::Never,
        ] {
            for junk in [
                JunkFoodIntake::High,
                JunkFoodIntake::Moderate,
                JunkFoodIntake::Low,
            ] {
                p.exercise_frequency = exercise;
                p.junk_food = junk;
                let plan = generate_plan(&p);
                assert_eq!(plan.section(Section::Exercise).count(), 1);
                let junk_entries = plan
                    .recommendations()
                    .iter()
                    .filter(|r| {
                        matches!(
                            r.rule,
                            Rule::JunkFoodReduce | Rule::JunkFoodModerate | Rule::JunkFoodMaintain
                        )
                    })
                    .count();
                assert_eq!(junk_entries, 1);
            }
        }
    }

    #[test]
    fn exercise_messages() {
        let mut p = baseline();
        p.exercise_frequency = ExerciseFrequency::Never;
        assert!(generate_plan(&p).contains(Rule::ExerciseStart));
        p.exercise_frequency = ExerciseFrequency::Occasionally;
        assert!(generate_plan(&p).contains(Rule::ExerciseConsistency));
    }

    #[test]
    fn stress_interpolates_occupation_verbatim() {
        let mut p = baseline();
        p.occupation = "Night-shift Nurse".into();
        let plan = generate_plan(&p);
        let stress = plan.section(Section::Stress).next().expect("stress entry");
        assert!(stress
            .text
            .starts_with("Based on your occupation as Night-shift Nurse, consider"));

        p.occupation = String::new();
        let plan = generate_plan(&p);
        let stress = plan.section(Section::Stress).next().expect("stress entry");
        assert!(stress.text.starts_with("Based on your occupation as , consider"));
    }

    #[test]
    fn checkup_is_strictly_above_forty() {
        let mut p = baseline();
        p.age = 40;
        assert!(!generate_plan(&p).contains(Rule::AgeCheckup));
        p.age = 41;
        assert!(generate_plan(&p).contains(Rule::AgeCheckup));
    }

    #[test]
    fn diabetes_matching() {
        let mut p = baseline();
        p.history.medical_conditions = text("Type 2 Diabetes");
        assert!(generate_plan(&p).contains(Rule::DiabetesCare));

        p.history.medical_conditions = text("prediabetic");
        assert!(generate_plan(&p).contains(Rule::DiabetesCare));

        p.history.medical_conditions = text("");
        assert!(!generate_plan(&p).contains(Rule::DiabetesCare));

        p.history.medical_conditions = None;
        assert!(!generate_plan(&p).contains(Rule::DiabetesCare));
    }

    #[test]
    fn diabetes_and_hypertension_fire_together() {
        let mut p = baseline();
        p.history.medical_conditions = text("diabetes, High Blood Pressure");
        let plan = generate_plan(&p);
        let preventive: Vec<Rule> = plan.section(Section::Preventive).map(|r| r.rule).collect();
        assert_eq!(preventive, vec![Rule::DiabetesCare, Rule::HypertensionCare]);
    }

    #[test]
    fn family_heart_history() {
        let mut p = baseline();
        p.history.family_history = text("Father: CARDIAC arrest");
        assert!(generate_plan(&p).contains(Rule::CardiovascularScreening));
        p.history.family_history = text("cancer");
        assert!(!generate_plan(&p).contains(Rule::CardiovascularScreening));
    }

    #[test]
    fn any_mental_health_answer_triggers_support() {
        let mut p = baseline();
        p.history.mental_health = text("no");
        assert!(generate_plan(&p).contains(Rule::MentalHealthSupport));
        p.history.mental_health = None;
        assert!(!generate_plan(&p).contains(Rule::MentalHealthSupport));
    }

    #[test]
    fn preventive_order_is_fixed() {
        let mut p = baseline();
        p.age = 55;
        p.history.medical_conditions = text("hypertension and diabetes");
        p.history.family_history = text("heart disease");
        p.history.mental_health = text("anxiety");
        let plan = generate_plan(&p);
        let preventive: Vec<Rule> = plan.section(Section::Preventive).map(|r| r.rule).collect();
        assert_eq!(
            preventive,
            vec![
                Rule::AgeCheckup,
                Rule::DiabetesCare,
                Rule::HypertensionCare,
                Rule::CardiovascularScreening,
                Rule::MentalHealthSupport,
            ]
        );
    }

    #[test]
    fn menstrual_cycle_does_not_affect_plan() {
        let mut p = baseline();
        let before = generate_plan(&p);
        p.menstrual_cycle = MenstrualCycle::Irregular;
        assert_eq!(generate_plan(&p), before);
    }

    #[test]
    fn identical_input_gives_identical_plan() {
        let mut p = baseline();
        p.history.mental_health = text("depression");
        assert_eq!(generate_plan(&p), generate_plan(&p));
    }

    #[test]
    fn custom_rules_change_matching() {
        let mut rules = RuleSet::default();
        rules.cardiac = KeywordSet::new(["coronary"]).expect("keywords");
        rules.checkup_age_above = 50;
        let engine = RecommendationEngine::new(rules);

        let mut p = baseline();
        p.age = 45;
        p.history.family_history = text("heart disease");
        let plan = engine.generate_plan(&p);
        assert!(!plan.contains(Rule::AgeCheckup));
        assert!(!plan.contains(Rule::CardiovascularScreening));

        p.history.family_history = text("Coronary artery disease");
        assert!(engine.generate_plan(&p).contains(Rule::CardiovascularScreening));
    }
}
