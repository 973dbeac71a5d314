mod customer_tests;
