#[cfg(test)]
mod tests {
    use dash::libs::model::{Model, ModelEvent};
    use dash::libs::person::Name;
    use dash::libs::predicate::{Keywords, PersonPredicate, TaskPredicate};
    use dash::libs::sample_data;
    use dash::libs::task::{Task, TaskDescription};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_model() -> Model {
        Model::new(sample_data::sample_address_book(), sample_data::sample_task_list())
    }

    fn task(description: &str) -> Task {
        Task::new(TaskDescription::new(description).unwrap())
    }

    fn record_events(model: &mut Model) -> Rc<RefCell<Vec<ModelEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        model.subscribe(Box::new(move |event| sink.borrow_mut().push(event)));
        events
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let model = sample_model();
        assert_eq!(model.task_filter(), &TaskPredicate::Always);
        assert_eq!(model.person_filter(), &PersonPredicate::Always);
        assert_eq!(model.filtered_task_list().len(), model.task_list().len());
        assert_eq!(model.filtered_person_list().len(), model.address_book().len());
    }

    #[test]
    fn test_view_refreshes_after_mutation() {
        let mut model = sample_model();
        let keywords = Keywords::new("description", &["quiz"]).unwrap();
        model.update_filtered_task_list(TaskPredicate::DescriptionContains(keywords));
        assert_eq!(model.filtered_task_list().len(), 1);

        // A new matching task shows up without re-applying the filter
        model.add_task(task("Pop quiz"));
        assert_eq!(model.filtered_task_list().len(), 2);

        model.add_task(task("Laundry"));
        assert_eq!(model.filtered_task_list().len(), 2);

        let pop_quiz = task("Pop quiz");
        model.delete_task(&pop_quiz);
        assert_eq!(model.filtered_task_list().len(), 1);
    }

    #[test]
    fn test_listeners_are_notified() {
        let mut model = sample_model();
        let events = record_events(&mut model);

        model.update_filtered_task_list(TaskPredicate::CompletionStatus(true));
        model.add_task(task("Laundry"));
        model.update_filtered_person_list(PersonPredicate::Always);
        model.sort_task_list();

        assert_eq!(
            *events.borrow(),
            vec![
                ModelEvent::TaskFilterChanged,
                ModelEvent::TasksChanged,
                ModelEvent::PersonFilterChanged,
                ModelEvent::TasksChanged,
            ]
        );
    }

    #[test]
    fn test_missing_target_is_a_no_op() {
        let mut model = sample_model();
        let events = record_events(&mut model);

        model.delete_task(&task("Not in the list"));
        model.set_task(&task("Not in the list"), task("Replacement"));

        assert!(events.borrow().is_empty());
        assert_eq!(model.task_list().len(), 4);
    }

    #[test]
    fn test_person_changes_notify_tasks_when_referenced() {
        let mut model = sample_model();
        let alex = model.address_book().persons()[0].clone();
        model.add_task(task("Lunch").with_people([alex.name.clone()].into_iter().collect()));
        let events = record_events(&mut model);

        model.delete_person(&alex);

        assert_eq!(*events.borrow(), vec![ModelEvent::PersonsChanged, ModelEvent::TasksChanged]);
        assert!(model.task_list().tasks().iter().all(|task| !task.references(&alex.name)));
    }

    #[test]
    fn test_person_references_ignore_case() {
        let mut model = sample_model();
        let alex = model.address_book().persons()[0].clone();
        let lowercase = Name::new("alex yeoh").unwrap();
        model.add_task(task("Lunch").with_people([lowercase.clone()].into_iter().collect()));
        model.add_task(task("Dinner").with_people([lowercase].into_iter().collect()));

        // A rename rewrites references spelled in any case
        let mut renamed = alex.clone();
        renamed.name = Name::new("Alex Tan").unwrap();
        model.set_person(&alex, renamed.clone());
        let lunch = &model.task_list().tasks()[4];
        let people: Vec<&str> = lunch.people.iter().map(Name::as_str).collect();
        assert_eq!(people, vec!["Alex Tan"]);

        model.delete_person(&renamed);
        assert!(model.task_list().tasks().iter().all(|task| task.people.is_empty()));
    }
}
