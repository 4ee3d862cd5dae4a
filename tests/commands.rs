#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dash::libs::command::person::{
        AddPersonCommand, ClearPeopleCommand, DeletePersonCommand, EditPersonCommand, EditPersonDescriptor,
        FindPersonCommand,
    };
    use dash::libs::command::task::{
        AddTaskCommand, ClearTasksCommand, CompleteTaskCommand, DeleteTaskCommand, EditTaskCommand,
        EditTaskDescriptor, FindTaskCommand, ListTasksCommand, UpcomingTaskCommand,
    };
    use dash::libs::command::{Command, ListTarget};
    use dash::libs::error::CommandError;
    use dash::libs::filter::{FindPersonDescriptor, FindTaskDescriptor};
    use dash::libs::messages::Message;
    use dash::libs::model::Model;
    use dash::libs::person::{Address, Email, Name, Person, Phone};
    use dash::libs::sample_data;
    use dash::libs::task::{Task, TaskDescription};
    use dash::libs::task_list::TaskList;
    use std::collections::BTreeSet;

    fn sample_model() -> Model {
        Model::new(sample_data::sample_address_book(), sample_data::sample_task_list())
    }

    fn task(description: &str) -> Task {
        Task::new(TaskDescription::new(description).unwrap())
    }

    fn person(name: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("someone@example.com").unwrap(),
            Address::new("311, Clementi Ave 2, #02-25").unwrap(),
            BTreeSet::new(),
        )
    }

    fn descriptions(model: &Model) -> Vec<String> {
        model
            .filtered_task_list()
            .iter()
            .map(|task| task.description.to_string())
            .collect()
    }

    #[test]
    fn test_find_task_reports_count() {
        let mut model = sample_model();
        let mut descriptor = FindTaskDescriptor::new();
        descriptor.set_tags(&["homework"]).unwrap();

        let result = FindTaskCommand::new(descriptor).execute(&mut model).unwrap();

        assert_eq!(result.message, Message::TasksListed(2));
        assert_eq!(result.message.to_string(), "2 tasks listed!");
        assert_eq!(result.target, ListTarget::Tasks);
        assert!(!result.mutated);
        assert_eq!(
            descriptions(&model),
            vec!["Submit CS2100 Assignment by 23:59", "ST2334 quiz before Friday"]
        );
        // The canonical list is untouched
        assert_eq!(model.task_list().len(), 4);
    }

    #[test]
    fn test_find_task_is_idempotent() {
        let mut model = sample_model();
        let mut descriptor = FindTaskDescriptor::new();
        descriptor.set_description(&["review", "lectures"]).unwrap();
        let command = FindTaskCommand::new(descriptor);

        let first = command.execute(&mut model).unwrap();
        let first_view = descriptions(&model);
        let second = command.execute(&mut model).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_view, descriptions(&model));
        assert_eq!(first.message, Message::TasksListed(2));
    }

    #[test]
    fn test_find_with_no_matches() {
        let mut model = sample_model();
        let mut descriptor = FindTaskDescriptor::new();
        descriptor.set_completion_status("complete").unwrap();

        let result = FindTaskCommand::new(descriptor).execute(&mut model).unwrap();

        assert_eq!(result.message.to_string(), "0 tasks listed!");
        assert!(model.filtered_task_list().is_empty());

        ListTasksCommand.execute(&mut model).unwrap();
        assert_eq!(model.filtered_task_list().len(), 4);
    }

    #[test]
    fn test_find_commands_compare_by_descriptor() {
        let build = || {
            let mut descriptor = FindTaskDescriptor::new();
            descriptor.set_description(&["quiz"]).unwrap();
            FindTaskCommand::new(descriptor)
        };
        assert_eq!(build(), build());
        assert_ne!(build(), FindTaskCommand::new(FindTaskDescriptor::new()));
        assert!(build().descriptor().is_any_field_set());
    }

    #[test]
    fn test_upcoming_sorts_then_filters() {
        let dates = [Some("2021-10-21"), Some("2020-01-01"), None, Some("2030-05-05")];
        let tasks: Vec<Task> = dates
            .iter()
            .enumerate()
            .map(|(index, date)| task(&format!("Task {}", index)).with_date(date.map(|raw| raw.parse().unwrap())))
            .collect();
        let mut model = Model::new(Default::default(), TaskList::from_tasks(tasks).unwrap());

        let now = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let result = UpcomingTaskCommand::at(now).execute(&mut model).unwrap();

        assert_eq!(result.message.to_string(), "1 tasks listed!");
        assert!(result.mutated);
        let upcoming = model.filtered_task_list();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date.unwrap().date(), NaiveDate::from_ymd_opt(2030, 5, 5).unwrap());

        // The canonical list is now chronological with the undated task last
        let order: Vec<&str> = model.task_list().tasks().iter().map(|task| task.description.as_str()).collect();
        assert_eq!(order, vec!["Task 1", "Task 0", "Task 3", "Task 2"]);
    }

    #[test]
    fn test_upcoming_view_is_chronological() {
        let tasks: Vec<Task> = ["2031-01-01", "2030-05-05, 18:00", "2030-05-05, 09:00"]
            .iter()
            .map(|raw| task(raw).with_date(Some(raw.parse().unwrap())))
            .collect();
        let mut model = Model::new(Default::default(), TaskList::from_tasks(tasks).unwrap());

        let now = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        UpcomingTaskCommand::at(now).execute(&mut model).unwrap();

        assert_eq!(
            descriptions(&model),
            vec!["2030-05-05, 09:00", "2030-05-05, 18:00", "2031-01-01"]
        );
    }

    #[test]
    fn test_add_task_links_people() {
        let mut model = sample_model();
        let command = AddTaskCommand::new(task("Plan trip"), vec![1, 4]);

        let result = command.execute(&mut model).unwrap();
        assert!(result.mutated);
        assert!(matches!(result.message, Message::TaskAdded(_)));

        let added = model.task_list().tasks().last().unwrap();
        let people: Vec<&str> = added.people.iter().map(Name::as_str).collect();
        assert_eq!(people, vec!["Alex Yeoh", "David Li"]);

        assert_eq!(command.execute(&mut model), Err(CommandError::DuplicateTask));
    }

    #[test]
    fn test_add_task_rejects_bad_person_index() {
        let mut model = sample_model();
        let result = AddTaskCommand::new(task("Plan trip"), vec![7]).execute(&mut model);

        assert_eq!(result, Err(CommandError::InvalidIndex { kind: "person", index: 7 }));
        assert_eq!(model.task_list().len(), 4);
    }

    #[test]
    fn test_task_index_refers_to_filtered_view() {
        let mut model = sample_model();
        let mut descriptor = FindTaskDescriptor::new();
        descriptor.set_tags(&["groupwork"]).unwrap();
        FindTaskCommand::new(descriptor).execute(&mut model).unwrap();

        assert_eq!(
            DeleteTaskCommand::new(2).execute(&mut model),
            Err(CommandError::InvalidIndex { kind: "task", index: 2 })
        );
        assert_eq!(
            DeleteTaskCommand::new(0).execute(&mut model),
            Err(CommandError::InvalidIndex { kind: "task", index: 0 })
        );

        let result = DeleteTaskCommand::new(1).execute(&mut model).unwrap();
        assert_eq!(result.message, Message::TaskDeleted("Do PR review; Tags: [groupwork]".to_string()));
        assert_eq!(model.task_list().len(), 3);
        assert!(model.filtered_task_list().is_empty());
    }

    #[test]
    fn test_complete_task() {
        let mut model = sample_model();

        CompleteTaskCommand::new(3).execute(&mut model).unwrap();
        assert!(model.task_list().tasks()[2].completed);

        assert_eq!(
            CompleteTaskCommand::new(3).execute(&mut model),
            Err(CommandError::TaskAlreadyComplete)
        );
    }

    #[test]
    fn test_edit_task() {
        let mut model = sample_model();
        assert_eq!(
            EditTaskCommand::new(1, EditTaskDescriptor::default()),
            Err(CommandError::NothingToEdit)
        );

        let descriptor = EditTaskDescriptor {
            description: Some(TaskDescription::new("Submit CS2100 Assignment 2").unwrap()),
            date: Some(Some("2021-10-21, 23:59".parse().unwrap())),
            person_indices: Some(vec![2]),
            ..Default::default()
        };
        EditTaskCommand::new(1, descriptor).unwrap().execute(&mut model).unwrap();

        let edited = &model.task_list().tasks()[0];
        assert_eq!(edited.description.as_str(), "Submit CS2100 Assignment 2");
        assert!(edited.date.is_some());
        assert!(edited.references(&Name::new("bernice yu").unwrap()));
        // Tags were not part of the edit
        assert_eq!(edited.tags.len(), 1);

        let clear_date = EditTaskDescriptor {
            date: Some(None),
            ..Default::default()
        };
        EditTaskCommand::new(1, clear_date).unwrap().execute(&mut model).unwrap();
        assert!(model.task_list().tasks()[0].date.is_none());
    }

    #[test]
    fn test_edit_task_into_duplicate() {
        let mut model = sample_model();
        let descriptor = EditTaskDescriptor {
            description: Some(TaskDescription::new("ST2334 quiz before Friday").unwrap()),
            ..Default::default()
        };
        let result = EditTaskCommand::new(1, descriptor).unwrap().execute(&mut model);
        assert_eq!(result, Err(CommandError::DuplicateTask));
    }

    #[test]
    fn test_clear_tasks() {
        let mut model = sample_model();
        let result = ClearTasksCommand.execute(&mut model).unwrap();

        assert_eq!(result.message.to_string(), "Task list has been cleared!");
        assert!(model.task_list().is_empty());
        assert_eq!(model.address_book().len(), 6);
    }

    #[test]
    fn test_add_person_rejects_same_name() {
        let mut model = sample_model();
        AddPersonCommand::new(person("Amy Bee")).execute(&mut model).unwrap();
        assert_eq!(model.address_book().len(), 7);

        let result = AddPersonCommand::new(person("amy bee")).execute(&mut model);
        assert_eq!(result, Err(CommandError::DuplicatePerson));
    }

    #[test]
    fn test_edit_person_renames_task_references() {
        let mut model = sample_model();
        AddTaskCommand::new(task("Lunch"), vec![1]).execute(&mut model).unwrap();

        let descriptor = EditPersonDescriptor {
            name: Some(Name::new("Alex Tan").unwrap()),
            ..Default::default()
        };
        EditPersonCommand::new(1, descriptor).unwrap().execute(&mut model).unwrap();

        let lunch = model.task_list().tasks().last().unwrap();
        assert!(lunch.references(&Name::new("Alex Tan").unwrap()));
        assert!(!lunch.references(&Name::new("Alex Yeoh").unwrap()));
    }

    #[test]
    fn test_edit_person_into_existing_name() {
        let mut model = sample_model();
        let descriptor = EditPersonDescriptor {
            name: Some(Name::new("BERNICE YU").unwrap()),
            ..Default::default()
        };
        let result = EditPersonCommand::new(1, descriptor).unwrap().execute(&mut model);
        assert_eq!(result, Err(CommandError::DuplicatePerson));

        // Changing only the case of a person's own name is allowed
        let descriptor = EditPersonDescriptor {
            name: Some(Name::new("ALEX YEOH").unwrap()),
            ..Default::default()
        };
        EditPersonCommand::new(1, descriptor).unwrap().execute(&mut model).unwrap();
        assert_eq!(model.address_book().persons()[0].name.as_str(), "ALEX YEOH");
    }

    #[test]
    fn test_delete_person_drops_task_references() {
        let mut model = sample_model();
        AddTaskCommand::new(task("Lunch"), vec![1, 2]).execute(&mut model).unwrap();

        DeletePersonCommand::new(1).execute(&mut model).unwrap();

        assert_eq!(model.address_book().len(), 5);
        let lunch = model.task_list().tasks().last().unwrap();
        let people: Vec<&str> = lunch.people.iter().map(Name::as_str).collect();
        assert_eq!(people, vec!["Bernice Yu"]);
    }

    #[test]
    fn test_find_person_and_clear() {
        let mut model = sample_model();
        let mut descriptor = FindPersonDescriptor::new();
        descriptor.set_name(&["alex", "david"]).unwrap();

        let result = FindPersonCommand::new(descriptor).execute(&mut model).unwrap();
        assert_eq!(result.message.to_string(), "2 persons listed!");
        assert_eq!(result.target, ListTarget::Persons);

        AddTaskCommand::new(task("Lunch"), vec![1]).execute(&mut model).unwrap();
        let result = ClearPeopleCommand.execute(&mut model).unwrap();

        assert_eq!(result.message.to_string(), "Address book has been cleared!");
        assert!(model.address_book().is_empty());
        assert!(model.task_list().tasks().iter().all(|task| task.people.is_empty()));
    }
}
