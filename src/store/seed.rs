use chrono::{Duration, Local};
use log::info;

use crate::models::dto::request::{NewMaterial, NewProject, NewQuestion, NewStudent, NewTeacher, NewTest};
use crate::store::contract::RecordStore;

/// Populates the fixed demo dataset: 3 students, 1 teacher, 3 projects,
/// 1 cognitive test with 10 questions, and 6 materials. Ids and content are
/// stable across runs (deadlines are relative to today), which fixture
/// tests rely on.
pub fn populate_sample_data(store: &dyn RecordStore) {
    let today = Local::now().date_naive();

    let sandy = store
        .add_student(NewStudent {
            username: "sandy".to_string(),
            password: "123".to_string(),
            email: "sandy@email.com".to_string(),
            full_name: "Sandy Putra Pratama".to_string(),
            student_number: "12345".to_string(),
            class_name: "XII RPL".to_string(),
        })
        .expect("seed student is valid");

    let budi = store
        .add_student(NewStudent {
            username: "budi".to_string(),
            password: "123".to_string(),
            email: "budi@email.com".to_string(),
            full_name: "Budi Santoso".to_string(),
            student_number: "12346".to_string(),
            class_name: "XII RPL".to_string(),
        })
        .expect("seed student is valid");

    store
        .add_student(NewStudent {
            username: "ani".to_string(),
            password: "123".to_string(),
            email: "ani@email.com".to_string(),
            full_name: "Ani Wijaya".to_string(),
            student_number: "12347".to_string(),
            class_name: "XII RPL".to_string(),
        })
        .expect("seed student is valid");

    let bambang = store
        .add_teacher(NewTeacher {
            username: "bambang".to_string(),
            password: "123".to_string(),
            email: "bambang@email.com".to_string(),
            full_name: "Bambang Sujatmiko".to_string(),
            staff_number: "98765".to_string(),
            subject: None,
        })
        .expect("seed teacher is valid");
    let teacher_id = bambang.account.id;

    store
        .add_project(NewProject {
            title: "Hello World - First Program".to_string(),
            description: "Write a small Java program that prints the text 'Hello, World!' \
                          to the console.\n\n\
                          Instructions:\n\
                          1. Create a class named HelloWorld\n\
                          2. Add a main method\n\
                          3. Use System.out.println() to print 'Hello, World!'\n\n\
                          Expected output:\n\
                          Hello, World!"
                .to_string(),
            deadline: today + Duration::days(7),
            student_id: sandy.account.id,
            teacher_id,
        })
        .expect("seed project is valid");

    store
        .add_project(NewProject {
            title: "Simple Calculator".to_string(),
            description: "Write a calculator program that adds two numbers.\n\n\
                          Instructions:\n\
                          1. Create a class Calculator\n\
                          2. Add a method add(int a, int b) that returns the sum\n\
                          3. Exercise it from main with a few inputs\n\n\
                          Expected output:\n\
                          5 + 3 = 8"
                .to_string(),
            deadline: today + Duration::days(14),
            student_id: sandy.account.id,
            teacher_id,
        })
        .expect("seed project is valid");

    store
        .add_project(NewProject {
            title: "Greeting Program".to_string(),
            description: "Write a program that greets the user by name.\n\n\
                          Instructions:\n\
                          1. Create a class Greeter\n\
                          2. Add a method greet(String name)\n\
                          3. The method must print 'Hello, [name]! Welcome!'\n\n\
                          Expected output:\n\
                          Hello, Budi! Welcome!"
                .to_string(),
            deadline: today + Duration::days(10),
            student_id: budi.account.id,
            teacher_id,
        })
        .expect("seed project is valid");

    let quiz = store
        .add_test(NewTest {
            title: "OOP Fundamentals Quiz".to_string(),
            duration_minutes: 30,
        })
        .expect("seed test is valid");

    let questions: [(&str, &str, &str, &str, &str, &str); 10] = [
        (
            "What is a class in object-oriented programming?",
            "A template or blueprint for creating objects",
            "A variable that stores data",
            "A function that runs the program",
            "A loop that repeats a process",
            "A",
        ),
        (
            "What is an object?",
            "A looping statement",
            "An instance of a class",
            "A method inside a class",
            "A global variable",
            "B",
        ),
        (
            "What is encapsulation?",
            "Inheriting properties from a parent class",
            "Polymorphism applied to methods",
            "Bundling data and the methods that work on it into one unit",
            "An abstraction of an object",
            "C",
        ),
        (
            "Which keyword introduces inheritance in Java?",
            "implements",
            "inherits",
            "extends",
            "inherit",
            "C",
        ),
        (
            "What is an advantage of using inheritance?",
            "Slower code",
            "Code reuse and a clear class hierarchy",
            "Higher memory usage",
            "Harder maintenance",
            "B",
        ),
        (
            "What is polymorphism?",
            "The ability of an object to take many forms",
            "Creating many classes",
            "Using many variables",
            "Inheriting from multiple classes",
            "A",
        ),
        (
            "Which of these is not a pillar of OOP?",
            "Encapsulation",
            "Inheritance",
            "Compilation",
            "Polymorphism",
            "C",
        ),
        (
            "What does the 'private' access modifier mean?",
            "Accessible from anywhere",
            "Accessible only within the same class",
            "Accessible from the same package",
            "Accessible from subclasses",
            "B",
        ),
        (
            "A method that shares its name with the class is called a?",
            "Destructor",
            "Getter",
            "Constructor",
            "Setter",
            "C",
        ),
        (
            "What is the 'super' keyword in Java for?",
            "Declaring a very large variable",
            "Calling a constructor or method of the parent class",
            "Making a class abstract",
            "Accessing a static method",
            "B",
        ),
    ];

    for (prompt, a, b, c, d, correct) in questions {
        store
            .add_question(
                quiz.id,
                NewQuestion {
                    prompt: prompt.to_string(),
                    choice_a: a.to_string(),
                    choice_b: b.to_string(),
                    choice_c: c.to_string(),
                    choice_d: d.to_string(),
                    correct_choice: correct.to_string(),
                },
            )
            .expect("seed question is valid");
    }

    let materials: [(&str, &str, &str); 6] = [
        (
            "Introduction to OOP",
            "Object-oriented programming (OOP) is a paradigm built around objects. An object \
             is an instance of a class that carries attributes (data) and methods (behavior). \
             OOP rests on four pillars: encapsulation, inheritance, polymorphism, and \
             abstraction. Programs written this way tend to be modular, structured, and easier \
             to maintain.",
            "OOP Basics",
        ),
        (
            "Classes and Objects",
            "A class is a template or blueprint for creating objects. It defines the attributes \
             (properties or fields) and methods (functions) every object of that kind will \
             have. An object is a concrete instance of a class, and a single class can produce \
             any number of objects. A class Car, for example, can create the objects car1, \
             car2, and so on.",
            "OOP Basics",
        ),
        (
            "Encapsulation",
            "Encapsulation bundles data (attributes) and the methods that operate on that data \
             into a single unit, the class. The goal is to hide the internal implementation and \
             expose only what the outside world needs. In practice this means access modifiers \
             (private, protected, public) together with getter and setter methods.",
            "OOP Basics",
        ),
        (
            "Inheritance",
            "Inheritance lets a class (the child or subclass) take over the attributes and \
             methods of another class (the parent or superclass). The payoff is code reuse, a \
             clear class hierarchy, and easier maintenance. Java expresses it with the \
             'extends' keyword, as in: class Student extends User.",
            "Advanced OOP",
        ),
        (
            "Polymorphism",
            "Polymorphism means 'many forms'. It lets one interface be used with different \
             types or objects. There are two kinds: compile-time polymorphism (method \
             overloading) and runtime polymorphism (method overriding). A toString() method \
             overridden in each class is a typical example.",
            "Advanced OOP",
        ),
        (
            "Abstraction",
            "Abstraction hides implementation detail and shows the user only the functionality: \
             the focus is on what something does, not how it does it. It is implemented with \
             abstract classes or interfaces. We know a car can drive without knowing the \
             details of its engine.",
            "Advanced OOP",
        ),
    ];

    for (title, content, topic) in materials {
        store
            .add_material(NewMaterial {
                title: title.to_string(),
                content: content.to_string(),
                topic: topic.to_string(),
                author_id: teacher_id,
                resource_url: None,
            })
            .expect("seed material is valid");
    }

    info!(
        "sample data ready: {} students, {} teachers, {} projects, {} tests, {} materials",
        store.all_students().len(),
        store.all_teachers().len(),
        store.all_projects().len(),
        store.all_tests().len(),
        store.all_materials().len()
    );
}
