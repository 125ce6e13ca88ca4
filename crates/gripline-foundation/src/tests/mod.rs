mod drag_tests;
