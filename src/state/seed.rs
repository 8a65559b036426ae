// Seed catalog for the book registry
// Loaded once at process start; the registry has no other data source

use super::app_state::Book;

/// The 30-entry catalog the registry starts with
pub fn seed_books() -> Vec<Book> {
    [
        ("To Kill a Mockingbird", "Harper Lee", "Fiction"),
        ("Sapiens", "Yuval Noah Harari", "History"),
        ("The Pragmatic Programmer", "David Thomas", "Technology"),
        ("Becoming", "Michelle Obama", "Biography"),
        ("Dune", "Frank Herbert", "Science Fiction"),
        ("The Silent Patient", "Alex Michaelides", "Mystery"),
        ("Atomic Habits", "James Clear", "Self-Help"),
        ("The Art of War", "Sun Tzu", "Philosophy"),
        ("Gone Girl", "Gillian Flynn", "Thriller"),
        ("A Brief History of Time", "Stephen Hawking", "Science"),
        ("The Catcher in the Rye", "J.D. Salinger", "Fiction"),
        ("Educated", "Tara Westover", "Memoir"),
        ("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
        ("Think and Grow Rich", "Napoleon Hill", "Business"),
        ("The Da Vinci Code", "Dan Brown", "Mystery"),
        ("1984", "George Orwell", "Dystopian"),
        (
            "The Immortal Life of Henrietta Lacks",
            "Rebecca Skloot",
            "Science",
        ),
        ("Where the Crawdads Sing", "Delia Owens", "Fiction"),
        (
            "The 7 Habits of Highly Effective People",
            "Stephen Covey",
            "Self-Help",
        ),
        ("The Handmaid's Tale", "Margaret Atwood", "Dystopian"),
        ("Thinking, Fast and Slow", "Daniel Kahneman", "Psychology"),
        ("The Girl with the Dragon Tattoo", "Stieg Larsson", "Crime"),
        ("Born a Crime", "Trevor Noah", "Biography"),
        ("The Lean Startup", "Eric Ries", "Business"),
        (
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
            "Fantasy",
        ),
        ("The Power of Now", "Eckhart Tolle", "Spirituality"),
        ("In Cold Blood", "Truman Capote", "True Crime"),
        ("The Alchemist", "Paulo Coelho", "Philosophy"),
        ("Clean Code", "Robert Martin", "Technology"),
        ("The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
    ]
    .into_iter()
    .map(|(title, author, category)| Book {
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
    })
    .collect()
}
